//! Interactive and list-driven entry points.
//!
//! Both entry points print every outcome, including errors, to the given
//! writer. Only I/O failures (reading input or writing output) are returned.

use std::io::{self, BufRead, Write};

use tracing::error;

use crate::batch::{TravelTimeProvider, batch_query, run_batch};
use crate::domain::{Batch, BatchError};
use crate::input::{read_stations, write_prompt};
use crate::report::print_results;

/// Width of the separator printed before results.
const SEPARATOR_WIDTH: usize = 50;

/// Errors caught at the entry points and reported to the user.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Station list could not be paired
    #[error(transparent)]
    Batch(#[from] BatchError),

    /// Writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Prompt for stations on `input`, query them and print the results.
///
/// Empty input and odd station counts are reported without issuing any
/// query.
pub async fn run_interactive<P, R, W>(provider: &P, input: R, out: &mut W) -> io::Result<()>
where
    P: TravelTimeProvider,
    R: BufRead,
    W: Write,
{
    write_prompt(out)?;
    let stations = read_stations(input)?;

    let batch = match Batch::from_input(&stations) {
        Ok(batch) => batch,
        Err(BatchError::Empty) => {
            writeln!(out, "No stations entered")?;
            return Ok(());
        }
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            return Ok(());
        }
    };

    writeln!(out, "Querying {} station pairs...", batch.pair_count())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    let results = run_batch(provider, &batch).await;
    if let Err(e) = print_results(out, &results) {
        report(out, "error during query", &QueryError::from(e))?;
    }

    Ok(())
}

/// Query a pre-built list of station names and print the results.
///
/// Query errors are printed to `out`, never returned.
pub async fn batch_query_from_list<P, S, W>(provider: &P, stations: &[S], out: &mut W) -> io::Result<()>
where
    P: TravelTimeProvider,
    S: AsRef<str>,
    W: Write,
{
    if let Err(e) = query_and_print(provider, stations, out).await {
        report(out, "query error", &e)?;
    }

    Ok(())
}

async fn query_and_print<P, S, W>(provider: &P, stations: &[S], out: &mut W) -> Result<(), QueryError>
where
    P: TravelTimeProvider,
    S: AsRef<str>,
    W: Write,
{
    let results = batch_query(provider, stations).await?;
    print_results(out, &results)?;
    Ok(())
}

fn report<W: Write>(out: &mut W, context: &str, err: &QueryError) -> io::Result<()> {
    error!(error = %err, "{context}");
    writeln!(out, "{context}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::test_support::FakeProvider;
    use std::io::Cursor;

    async fn interactive(provider: &FakeProvider, input: &str) -> String {
        let mut out = Vec::new();
        run_interactive(provider, Cursor::new(input.to_string()), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn interactive_prints_results() {
        let provider = FakeProvider::default()
            .with("A", "B", 180)
            .with("C", "D", 90);

        let out = interactive(&provider, "A B\nC D\n\n").await;

        assert!(out.contains("Querying 2 station pairs..."));
        assert!(out.contains(&"-".repeat(50)));
        assert!(out.contains("A -> B: 180s (3.0 min)"));
        assert!(out.contains("C -> D: 90s (1.5 min)"));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn interactive_empty_input() {
        let provider = FakeProvider::default();

        let out = interactive(&provider, "\n").await;

        assert!(out.contains("No stations entered"));
        assert!(!out.contains("Querying"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn interactive_odd_count() {
        let provider = FakeProvider::default();

        let out = interactive(&provider, "A B C\n\n").await;

        assert!(out.contains("Error: 3 stations entered"));
        assert!(out.contains("even"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn interactive_failed_pair_marked() {
        let provider = FakeProvider::default();

        let out = interactive(&provider, "A B\n\n").await;

        assert!(out.contains("A -> B: query failed"));
    }

    #[tokio::test]
    async fn interactive_invalid_utf8_is_read_error() {
        let provider = FakeProvider::default();
        let mut out = Vec::new();

        let err = run_interactive(&provider, Cursor::new(b"A \xff\n\n".to_vec()), &mut out)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn from_list_prints_results() {
        let provider = FakeProvider::default().with("A", "B", 60);
        let mut out = Vec::new();

        batch_query_from_list(&provider, &[" A", "B "], &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "A -> B: 60s (1.0 min)\n");
    }

    #[tokio::test]
    async fn from_list_reports_odd_count() {
        let provider = FakeProvider::default();
        let mut out = Vec::new();

        batch_query_from_list(&provider, &["A"], &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("query error: 1 stations entered"));
        assert_eq!(provider.call_count(), 0);
    }
}
