use rand::Rng;

use crate::domain::ports::InvitationRepository;
use crate::error::AppError;

pub const CODE_LEN: usize = 8;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws a candidate share code uniformly from the 36^8 code space.
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Allocates a code no stored invitation currently uses. Collisions redraw
/// transparently; a storage failure during the existence check aborts the
/// whole allocation. The UNIQUE constraint on the code column stays the
/// authoritative guard — callers treat a duplicate-key insert as a signal
/// to allocate again.
pub async fn allocate_code(repo: &dyn InvitationRepository) -> Result<String, AppError> {
    loop {
        let code = generate_code();
        if !repo.code_exists(&code).await? {
            return Ok(code);
        }
    }
}
