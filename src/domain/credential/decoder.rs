// Reads a QR artifact back into a structured vote record.

use std::path::Path;

use anyhow::Context;

use crate::domain::model::VoteRecord;

/// Result of scanning an image artifact.
#[derive(Debug)]
pub enum ScanOutcome {
    /// The image contains no readable QR grid. Soft: nothing to process.
    NoCode,
    /// A record was decoded but its token does not match the digest
    /// recomputed from its identity fields. The caller must refuse it.
    Tampered {
        record: VoteRecord,
        expected_token: String,
    },
    /// A decoded record whose token verified.
    Verified(VoteRecord),
}

/// Scans `image_path` for one embedded credential payload.
///
/// An unreadable image or a grid whose payload is not a valid record is a
/// hard error; an image without any grid is a soft [`ScanOutcome::NoCode`].
pub fn scan(image_path: &Path) -> anyhow::Result<ScanOutcome> {
    let img = image::open(image_path)
        .with_context(|| format!("failed to open QR artifact {}", image_path.display()))?
        .to_luma8();

    let mut prepared = rqrr::PreparedImage::prepare(img);
    let grids = prepared.detect_grids();
    let Some(grid) = grids.first() else {
        return Ok(ScanOutcome::NoCode);
    };

    let (_meta, payload) = grid.decode().context("failed to decode QR payload")?;
    let record: VoteRecord =
        serde_json::from_str(&payload).context("QR payload is not a valid vote record")?;

    let expected_token = record.expected_token();
    if record.session_token != expected_token {
        return Ok(ScanOutcome::Tampered {
            record,
            expected_token,
        });
    }
    Ok(ScanOutcome::Verified(record))
}
