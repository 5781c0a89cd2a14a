use std::path::{Path, PathBuf};

use rasterfx_imgproc::engine::{FilterOutput, ImageSink};

use crate::{error::IoError, functional, png};

/// Build the output path of a filter by splicing `suffix` between file stem and extension.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use rasterfx_io::sink::output_path;
///
/// assert_eq!(output_path("images/cy.png", "_inv"), PathBuf::from("images/cy_inv.png"));
/// ```
pub fn output_path(input: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let input = input.as_ref();

    let mut file_name = input.file_stem().unwrap_or_default().to_os_string();
    file_name.push(suffix);
    if let Some(extension) = input.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    input.with_file_name(file_name)
}

/// Writes every filter output to disk, named after the input image.
///
/// `cy.png` run through invert is written to `cy_inv.png`, next to the input or inside the
/// configured output directory. The extension of the input picks the encoder.
#[derive(Debug, Clone)]
pub struct FileSink {
    input: PathBuf,
    output_dir: Option<PathBuf>,
    written: Vec<PathBuf>,
}

impl FileSink {
    /// Create a sink that writes next to `input`.
    pub fn new(input: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output_dir: None,
            written: Vec::new(),
        }
    }

    /// Write into `output_dir` instead of the directory of the input.
    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(output_dir.as_ref().to_path_buf());
        self
    }

    /// The path an output with the given suffix is written to.
    pub fn path_for(&self, suffix: &str) -> PathBuf {
        let path = output_path(&self.input, suffix);
        if let (Some(dir), Some(file_name)) = (&self.output_dir, path.file_name()) {
            return dir.join(file_name);
        }
        path
    }

    /// The files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ImageSink for FileSink {
    type Error = IoError;

    fn consume(&mut self, output: FilterOutput) -> Result<(), Self::Error> {
        let path = self.path_for(output.suffix);

        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

        if is_png {
            png::write_image_png_rgb8(&path, &output.image)?;
        } else {
            functional::write_image_any_rgb8(&path, &output.image)?;
        }

        log::debug!("{} written to {}", output.kind, path.display());

        self.written.push(path);

        Ok(())
    }
}
