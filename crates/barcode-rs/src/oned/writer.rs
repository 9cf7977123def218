use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;

/// Quiet zone width, in modules, for symbologies without a tighter
/// standard of their own.
pub const DEFAULT_MARGIN: usize = 10;

/// A 1-D symbology encoder: everything above the shared rendering.
///
/// Implementors produce the minimal module run; [`encode_one_dimensional`]
/// validates the request and scales the run into a matrix whose rows are
/// all identical. Each encoder forwards its [`crate::Writer`]
/// implementation there.
pub trait OneDimensionalWriter {
    /// The single format this encoder produces.
    fn format(&self) -> BarcodeFormat;

    /// Quiet zone width in modules on either side.
    fn default_margin(&self) -> usize {
        DEFAULT_MARGIN
    }

    /// Encodes the contents into the minimal run of modules.
    fn encode_contents(&self, contents: &str, hints: &EncodeHints) -> Result<Vec<bool>, EncodeError>;
}

/// The shared entry point behind every 1-D [`crate::Writer`] implementation.
pub(crate) fn encode_one_dimensional(
    writer: &dyn OneDimensionalWriter,
    contents: &str,
    format: BarcodeFormat,
    width: i32,
    height: i32,
    hints: &EncodeHints,
) -> Result<BitMatrix, EncodeError> {
    if contents.is_empty() {
        return Err(EncodeError::BadInput("found empty contents".to_owned()));
    }
    if format != writer.format() {
        return Err(EncodeError::BadInput(format!(
            "can only encode {}, but got {}",
            writer.format(),
            format
        )));
    }
    if width < 0 || height < 0 {
        return Err(EncodeError::BadInput(format!(
            "negative size is not allowed: {}x{}",
            width, height
        )));
    }
    let sides_margin = hints
        .margin
        .map(|margin| margin as usize)
        .unwrap_or_else(|| writer.default_margin());
    let code = writer.encode_contents(contents, hints)?;
    render_result(&code, width, height, sides_margin)
}

// Scales the module run to at least the requested width; leftover width is
// split evenly into the side margins.
pub(crate) fn render_result(
    code: &[bool],
    width: i32,
    height: i32,
    sides_margin: usize,
) -> Result<BitMatrix, EncodeError> {
    let input_width = code.len();
    let full_width = input_width + sides_margin;
    let output_width = full_width.max(width as usize);
    let output_height = 1.max(height as usize);

    let multiple = output_width / full_width;
    let left_padding = (output_width - input_width * multiple) / 2;

    let mut output = BitMatrix::new(output_width, output_height);
    for (input_x, &bar) in code.iter().enumerate() {
        if bar {
            output.set_region(left_padding + input_x * multiple, 0, multiple, output_height)?;
        }
    }
    Ok(output)
}

/// Writes `pattern` into `target` at `pos`, one element per run of modules,
/// alternating color starting with `start_color`. Returns the number of
/// modules written.
pub(crate) fn append_pattern(
    target: &mut [bool],
    pos: usize,
    pattern: &[usize],
    start_color: bool,
) -> usize {
    let mut color = start_color;
    let mut index = pos;
    let mut num_added = 0;
    for &len in pattern {
        for _ in 0..len {
            target[index] = color;
            index += 1;
        }
        num_added += len;
        color = !color;
    }
    num_added
}

#[cfg(test)]
pub(crate) fn row_text(matrix: &BitMatrix) -> String {
    (0..matrix.width())
        .map(|x| if matrix.get(x, 0) { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
pub(crate) fn modules_text(code: &[bool]) -> String {
    code.iter().map(|&bar| if bar { '1' } else { '0' }).collect()
}
