//! Intake configuration.
//!
//! Every tunable the classifiers and the validation pass consult lives
//! here, so callers (and tests) can override behavior deterministically
//! instead of relying on embedded constants.

use rand::Rng;
use serde::Serialize;

use crate::models::StaffRole;

/// Placeholder password generation for imported staff accounts.
///
/// Not a credential: the external auth provider issues the real one. The
/// generated value only satisfies the storage schema's non-null column.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordSpec {
    /// Fixed output length in characters.
    pub length: usize,
    /// Characters drawn from, uniformly.
    pub charset: String,
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self {
            length: 8,
            charset: "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".into(),
        }
    }
}

impl PasswordSpec {
    /// Generate one placeholder password.
    pub fn generate(&self) -> String {
        let chars: Vec<char> = self.charset.chars().collect();
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect()
    }
}

/// Tunables for free-text intake.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeConfig {
    /// Role assigned when a contact line carries no role, or one outside
    /// the recognized set.
    pub default_role: StaffRole,
    /// Station assigned to contacts whose line has no station id. `None`
    /// means such contacts are rejected during validation (unless the role
    /// is station-independent).
    pub default_station: Option<String>,
    /// Placeholder credential generation.
    pub password: PasswordSpec,
    /// Hard per-line byte bound. Longer lines are truncated before any
    /// pattern matching runs.
    pub max_line_len: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            default_role: StaffRole::Worker,
            default_station: None,
            password: PasswordSpec::default(),
            max_line_len: 4096,
        }
    }
}
