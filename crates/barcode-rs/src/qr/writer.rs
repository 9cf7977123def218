use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::qr::{encoder, ErrorCorrectionLevel, QrCode};
use crate::Writer;

/// Modules of blank margin on each side of the symbol.
pub const QUIET_ZONE_SIZE: usize = 4;

/// Renders QR Codes through the common [`Writer`] surface.
pub struct QrCodeWriter;

impl Writer for QrCodeWriter {
    fn encode(
        &self,
        contents: &str,
        format: BarcodeFormat,
        width: i32,
        height: i32,
        hints: &EncodeHints,
    ) -> Result<BitMatrix, EncodeError> {
        if contents.is_empty() {
            return Err(EncodeError::BadInput("found empty contents".to_owned()));
        }
        if format != BarcodeFormat::QrCode {
            return Err(EncodeError::BadInput(format!(
                "can only encode QR_CODE, but got {}",
                format
            )));
        }
        if width < 0 || height < 0 {
            return Err(EncodeError::BadInput(format!(
                "requested dimensions are too small: {}x{}",
                width, height
            )));
        }

        let ec_level = hints.error_correction.unwrap_or(ErrorCorrectionLevel::L);
        let quiet_zone = hints
            .margin
            .map(|margin| margin as usize)
            .unwrap_or(QUIET_ZONE_SIZE);

        let code = encoder::encode(contents, ec_level, hints)?;
        render_result(&code, width, height, quiet_zone)
    }
}

// Scales the module grid by the largest integer multiple that fits the
// requested box, centered, with the quiet zone around it.
fn render_result(
    code: &QrCode,
    width: i32,
    height: i32,
    quiet_zone: usize,
) -> Result<BitMatrix, EncodeError> {
    let input = &code.matrix;
    let input_width = input.width();
    let input_height = input.height();
    let qr_width = input_width + quiet_zone * 2;
    let qr_height = input_height + quiet_zone * 2;
    let output_width = qr_width.max(width as usize);
    let output_height = qr_height.max(height as usize);

    let multiple = (output_width / qr_width).min(output_height / qr_height);
    let left_padding = (output_width - input_width * multiple) / 2;
    let top_padding = (output_height - input_height * multiple) / 2;

    let mut output = BitMatrix::new(output_width, output_height);
    for input_y in 0..input_height {
        let output_y = top_padding + input_y * multiple;
        for input_x in 0..input_width {
            if input.get(input_x, input_y) == 1 {
                let output_x = left_padding + input_x * multiple;
                output.set_region(output_x, output_y, multiple, multiple)?;
            }
        }
    }
    Ok(output)
}
