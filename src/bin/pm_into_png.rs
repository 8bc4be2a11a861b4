#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	clap::Parser,
	pm_blobs_project::pm::{self, Image, TransparencyTable, BLOB_SIZE},
	std::{
		fs::{self, File},
		io::BufWriter,
		path::Path,
	},
};

fn main() {
	#[derive(Parser)]
	struct Args {
		pixelFilepath: String,
		palFilepath: String,

		#[clap(long)]
		outputImage: Option<String>,

		#[clap(long)]
		transparent: Option<u8>,

		#[clap(long)]
		colorList: Option<String>,

		#[clap(long, default_value_t = BLOB_SIZE)]
		width: u32,

		#[clap(long, default_value_t = BLOB_SIZE)]
		height: u32,
	}
	let Args { pixelFilepath, palFilepath, outputImage, transparent, colorList, width, height } =
		Args::parse();

	let table = colorList.map(|colorListFilepath| {
		TransparencyTable::parse(
			&fs::read_to_string(&colorListFilepath)
				.unwrap_or_else(|err| panic!("{colorListFilepath:?}: {err}")),
		)
	});
	let transparentIndex = {
		let baseFilename =
			Path::new(&pixelFilepath).file_stem().and_then(|stem| stem.to_str()).unwrap_or("");
		pm::resolveTransparentIndex(baseFilename, table.as_ref(), transparent)
	};
	if let Some(transparentIndex) = transparentIndex {
		println!("Using transparent color index: {transparentIndex}");
	}

	let pixels = pm::readPixels(
		File::open(&pixelFilepath).unwrap_or_else(|err| panic!("{pixelFilepath:?}: {err}")),
		Some(width as usize * height as usize),
	)
	.unwrap_or_else(|err| panic!("{pixelFilepath:?}: {err}"));
	let pal =
		pm::readPalette(File::open(&palFilepath).unwrap_or_else(|err| panic!("{palFilepath:?}: {err}")))
			.unwrap_or_else(|err| panic!("{palFilepath:?}: {err}"));

	let outputFilepath = outputImage.unwrap_or_else(|| {
		Path::new(&pixelFilepath).with_extension("png").to_string_lossy().into_owned()
	});
	Image::new(width, height, pixels, pal, transparentIndex)
		.writePNG(BufWriter::new(
			File::create(&outputFilepath).unwrap_or_else(|err| panic!("{outputFilepath:?}: {err}")),
		))
		.unwrap_or_else(|err| panic!("{outputFilepath:?}: {err}"));
	println!("Image saved as {outputFilepath}");
}
