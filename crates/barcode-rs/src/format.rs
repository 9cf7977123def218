use serde::{Deserialize, Serialize};

/// The barcode symbologies this crate can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarcodeFormat {
    /// CODABAR 1-D format.
    Codabar,
    /// Code 39 1-D format.
    Code39,
    /// Code 93 1-D format.
    Code93,
    /// Code 128 1-D format.
    Code128,
    /// EAN-8 1-D format.
    Ean8,
    /// EAN-13 1-D format.
    Ean13,
    /// ITF (Interleaved Two of Five) 1-D format.
    Itf,
    /// MSI (modified Plessey) 1-D format.
    Msi,
    /// Plessey 1-D format.
    Plessey,
    /// QR Code 2-D format.
    QrCode,
    /// UPC-A 1-D format.
    UpcA,
    /// UPC-E 1-D format.
    UpcE,
}

impl std::fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::Codabar => "CODABAR",
            Self::Code39 => "CODE_39",
            Self::Code93 => "CODE_93",
            Self::Code128 => "CODE_128",
            Self::Ean8 => "EAN_8",
            Self::Ean13 => "EAN_13",
            Self::Itf => "ITF",
            Self::Msi => "MSI",
            Self::Plessey => "PLESSEY",
            Self::QrCode => "QR_CODE",
            Self::UpcA => "UPC_A",
            Self::UpcE => "UPC_E",
        };
        write!(f, "{}", name)
    }
}
