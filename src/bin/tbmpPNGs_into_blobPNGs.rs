#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	pm_blobs_project::tbmp,
	std::{env, fs, path::Path},
};

fn main() {
	let folderPath = env::args().nth(1).unwrap_or_else(|| "./toRename".to_string());
	let dirEntries = fs::read_dir(&folderPath).unwrap_or_else(|err| panic!("{folderPath:?}: {err}"));
	for dirEntry in dirEntries {
		let filename = dirEntry.unwrap().file_name();
		let filename = match filename.to_str() {
			None => continue,
			Some(some) => some,
		};
		println!("{filename}");
		if let Some(blobFilename) = tbmp::blobFilename(filename) {
			let folderPath = Path::new(&folderPath);
			fs::rename(folderPath.join(filename), folderPath.join(&blobFilename))
				.unwrap_or_else(|err| panic!("{filename:?}: {err}"));
			println!("Renamed {filename:?} to {blobFilename:?}");
		}
	}
}
