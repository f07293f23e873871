//! Generate command.

use anyhow::Result;
use clap::Args;
use cnpj_alfa::{Charset, Cnpj};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::output::print_output;

use super::CommandContext;

/// Generate random valid documents, for fixtures and testing.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Number of documents to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Generate legacy digits-only documents.
    #[arg(long)]
    numeric: bool,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Serialize, Tabled)]
struct GeneratedRow {
    cnpj: String,
    normalized: String,
}

impl GenerateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let charset = if self.numeric {
            Charset::Numeric
        } else {
            Charset::Alphanumeric
        };
        info!(count = self.count, ?charset, seed = ?self.seed, "generating documents");

        let rows = match self.seed {
            Some(seed) => generate(&mut StdRng::seed_from_u64(seed), self.count, charset),
            None => generate(&mut rand::rng(), self.count, charset),
        };

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn generate<R: Rng>(rng: &mut R, count: usize, charset: Charset) -> Vec<GeneratedRow> {
    (0..count)
        .map(|_| {
            let cnpj = Cnpj::generate(rng, charset);
            GeneratedRow {
                cnpj: cnpj.formatted(),
                normalized: cnpj.as_str().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_and_validity() {
        let rows = generate(&mut StdRng::seed_from_u64(3), 5, Charset::Alphanumeric);
        assert_eq!(rows.len(), 5);
        for row in &rows {
            assert!(cnpj_alfa::validate(&row.cnpj));
            assert_eq!(cnpj_alfa::format(&row.normalized), row.cnpj);
        }
    }

    #[test]
    fn test_generate_numeric() {
        let rows = generate(&mut StdRng::seed_from_u64(3), 5, Charset::Numeric);
        assert!(rows
            .iter()
            .all(|row| row.normalized.bytes().all(|b| b.is_ascii_digit())));
    }

    #[test]
    fn test_generate_seeded_is_reproducible() {
        let a = generate(&mut StdRng::seed_from_u64(11), 3, Charset::Alphanumeric);
        let b = generate(&mut StdRng::seed_from_u64(11), 3, Charset::Alphanumeric);
        let a: Vec<_> = a.into_iter().map(|row| row.normalized).collect();
        let b: Vec<_> = b.into_iter().map(|row| row.normalized).collect();
        assert_eq!(a, b);
    }
}
