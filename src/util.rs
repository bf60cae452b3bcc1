/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a time-based 53-bit ID for products and audit entries.
///
/// Layout (fits in a JSON-safe integer):
///   - 41 bits: milliseconds since 2024-01-01 UTC
///   - 12 bits: random (4096 values per ms, collision-free at single-user scale)
///
/// Monotonic across a session, which is the only uniqueness guarantee the
/// catalog needs: one administrator, no concurrent writers.
pub fn time_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// String form of [`time_id`], the representation stored on entities.
pub fn time_id_string() -> String {
    time_id().to_string()
}

/// Encode raw image bytes as the opaque data-URL reference stored on a
/// product. The engine never decodes or processes these again.
pub fn encode_image(mime: &str, bytes: &[u8]) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
