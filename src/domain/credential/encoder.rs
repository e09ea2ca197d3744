// Renders a voter credential into a scannable QR artifact.

use std::path::Path;

use anyhow::Context;
use qrcode::QrCode;

use crate::domain::model::VoteRecord;

/// Generates the credential for a (voter, session) pair and writes it as a
/// QR PNG at `output_path`. Returns the encoded record.
///
/// The payload is the record serialized as a UTF-8 JSON object.
pub fn encode(
    voter_id: &str,
    voting_session_id: &str,
    output_path: &Path,
) -> anyhow::Result<VoteRecord> {
    anyhow::ensure!(!voter_id.is_empty(), "voter_id must be non-empty");
    anyhow::ensure!(
        !voting_session_id.is_empty(),
        "voting_session_id must be non-empty"
    );

    let record = VoteRecord::new(voter_id, voting_session_id);
    let payload = serde_json::to_string(&record)?;

    let code = QrCode::new(payload.as_bytes())?;
    let img = code
        .render::<image::Luma<u8>>()
        .module_dimensions(10, 10)
        .build();
    img.save(output_path)
        .with_context(|| format!("failed to write QR artifact {}", output_path.display()))?;

    println!("QR code generated and saved as {}", output_path.display());
    Ok(record)
}
