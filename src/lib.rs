#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

pub const RGB_SIZE: usize = 3;
pub const PAL_LEN: usize = 256 * RGB_SIZE;

pub mod pm {
	use {
		crate::{PAL_LEN, RGB_SIZE},
		memchr::memmem,
		png::ColorType,
		std::{
			collections::HashMap,
			io::{self, Read, Write},
		},
	};

	pub const BLOB_SIZE: u32 = 16;
	pub const NO_TRANSPARENCY: u8 = 255;

	/*
		PM file :

		no header, one byte per pixel, row-major. Each byte is an index into a
		separate .pal file of tightly packed RGB triplets.
	*/
	pub fn readPixels(mut reader: impl Read, expectedCount: Option<usize>) -> io::Result<Vec<u8>> {
		let mut pixels = Vec::new();
		match expectedCount {
			None => {
				reader.read_to_end(&mut pixels)?;
			}
			Some(expectedCount) => {
				pixels.reserve_exact(expectedCount);
				reader.take(expectedCount as u64).read_to_end(&mut pixels)?;
				if pixels.len() != expectedCount {
					return Err(io::Error::new(
						io::ErrorKind::UnexpectedEof,
						format!("{} pixel bytes instead of {expectedCount}", pixels.len()),
					));
				}
			}
		}
		Ok(pixels)
	}

	pub fn readPalette(mut reader: impl Read) -> io::Result<Vec<u8>> {
		let mut pal = Vec::with_capacity(PAL_LEN);
		reader.read_to_end(&mut pal)?;
		pal.truncate(pal.len() / RGB_SIZE * RGB_SIZE); // a trailing partial triplet is dropped
		Ok(pal)
	}

	/*
		Transparent-colors list line :

		<index>[,...] // <filename>.<ext>

		lines of any other shape are skipped.
	*/
	pub struct TransparencyTable(HashMap<String, u8>);

	impl TransparencyTable {
		pub fn parse(text: &str) -> TransparencyTable {
			let mut map = HashMap::new();
			for line in text.lines() {
				let (indexPart, filenamePart) = match memmem::find(line.as_bytes(), b"//") {
					None => continue,
					Some(position) => (&line[..position], &line[position + "//".len()..]),
				};
				let transparentIndex = match indexPart.split(',').next().unwrap().trim().parse() {
					Err(_) => continue,
					Ok(ok) => ok,
				};
				let baseFilename = filenamePart.trim().split('.').next().unwrap().trim();
				map.insert(baseFilename.to_string(), transparentIndex);
			}
			TransparencyTable(map)
		}

		pub fn get(&self, baseFilename: &str) -> Option<u8> {
			self.0.get(baseFilename).copied()
		}
	}

	pub fn resolveTransparentIndex(
		baseFilename: &str,
		table: Option<&TransparencyTable>,
		explicitIndex: Option<u8>,
	) -> Option<u8> {
		match table.and_then(|table| table.get(baseFilename)) {
			None | Some(NO_TRANSPARENCY) => explicitIndex,
			tableIndex => tableIndex,
		}
	}

	pub struct Image {
		pub width: u32,
		pub height: u32,
		pub pixels: Vec<u8>,
		pub pal: Vec<u8>,
		pub transparentIndex: Option<u8>,
	}

	impl Image {
		pub fn new(
			width: u32,
			height: u32,
			pixels: Vec<u8>,
			mut pal: Vec<u8>,
			transparentIndex: Option<u8>,
		) -> Image {
			assert_eq!(pixels.len(), width as usize * height as usize);
			pal.truncate(PAL_LEN); // a PLTE holds 256 entries, no more
			let numPALEntries = pal.len() / RGB_SIZE;
			if let Some(&maxIndex) = pixels.iter().max() {
				assert!((maxIndex as usize) < numPALEntries, "pixel index {maxIndex} has no palette entry");
			}
			if let Some(transparentIndex) = transparentIndex {
				assert!(
					(transparentIndex as usize) < numPALEntries,
					"transparent index {transparentIndex} has no palette entry"
				);
			}
			Image { width, height, pixels, pal, transparentIndex }
		}

		pub fn writePNG(&self, writer: impl Write) -> Result<(), png::EncodingError> {
			let mut png = png::Encoder::new(writer, self.width, self.height);
			png.set_color(ColorType::Indexed);
			png.set_palette(self.pal.as_slice());
			if let Some(transparentIndex) = self.transparentIndex {
				// one alpha entry per palette entry up to the transparent one; entries past the
				// end of tRNS default to opaque
				let mut alphas = vec![0xFF_u8; transparentIndex as usize + 1];
				alphas[transparentIndex as usize] = 0;
				png.set_trns(alphas);
			}
			png.write_header()?.write_image_data(&self.pixels)
		}
	}
}

pub mod tbmp {
	use {const_format::formatcp, core::fmt::Write};

	const BLOB_FILENAME_MAX: &'static str = formatcp!("blob{}.png", u16::MAX);

	pub fn blobFilename(tbmpFilename: &str) -> Option<String> {
		let hexDigits = tbmpFilename.strip_prefix("Tbmp")?.strip_suffix(".png")?;
		if hexDigits.len() != 4 || !hexDigits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
			return None;
		}
		let mut blobFilename = String::with_capacity(BLOB_FILENAME_MAX.len());
		write!(blobFilename, "blob{}.png", u16::from_str_radix(hexDigits, 16).unwrap()).unwrap();
		Some(blobFilename)
	}
}
