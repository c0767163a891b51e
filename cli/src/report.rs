//! Report rendering
//!
//! The text layout is fixed byte for byte: tab indented continuation
//! lines, no separator between sessions and no space before `seconds`.

use crate::client::{CallOutcome, FetchError};
use crate::model::{PeerReport, PeerSession};
use snafu::prelude::*;
use std::fmt;

/// Output formats for a successful report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One fixed six line block per session
    #[default]
    Text,
    /// Sessions as a pretty printed JSON array
    Json,
    /// Session neighbor addresses, one per line
    Quiet,
}

/// Errors raised while rendering a report
#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display("Could not serialize the peer report: {source}."))]
    Json { source: serde_json::Error },
}

impl fmt::Display for PeerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BGP neighbor is: {}, remote AS: {}",
            self.conf.neighbor_address, self.conf.peer_as
        )?;
        writeln!(f, "\tBGP version: 4, remote route ID {}", self.conf.id)?;
        writeln!(
            f,
            "\tBGP state = {}, up for {}",
            self.info.bgp_state, self.timers.state.uptime
        )?;
        writeln!(
            f,
            "\tBGP OutQ = {}, Flops = {}",
            self.info.out_q, self.info.flops
        )?;
        writeln!(
            f,
            "\tHold time is {}, keepalive interval is {}seconds",
            self.timers.state.negotiated_hold_time, self.timers.state.keepalive_interval
        )?;
        writeln!(
            f,
            "\tConfigured hold time is {}",
            self.timers.config.hold_time
        )
    }
}

/// Concatenates the text block of every session, in order.
///
/// An empty report renders as an empty string.
pub fn render_report(report: &PeerReport) -> String {
    report_debug!("(render_report) rendering {} sessions.", report.len());
    report.iter().map(ToString::to_string).collect()
}

/// Renders a failed call as `code`, `message` and `details` lines.
///
/// Always three lines, the last one possibly empty.
pub fn render_failure(error: &FetchError) -> String {
    match error {
        FetchError::Rpc {
            code,
            message,
            details,
        } => format!("{}\n{}\n{}\n", code, message, details),
    }
}

/// Renders either outcome with the text layout.
pub fn render_outcome(outcome: &CallOutcome) -> String {
    match outcome {
        Ok(report) => render_report(report),
        Err(error) => render_failure(error),
    }
}

/// Renders a successful report in the requested format.
pub fn render_report_as(report: &PeerReport, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_report(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report).context(JsonSnafu)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Quiet => Ok(report
            .iter()
            .map(|session| format!("{}\n", session.address()))
            .collect()),
    }
}

/// Renders either outcome; failures use the three line block in every format.
pub fn render_outcome_as(
    outcome: &CallOutcome,
    format: OutputFormat,
) -> Result<String, RenderError> {
    match outcome {
        Ok(report) => render_report_as(report, format),
        Err(error) => Ok(render_failure(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{example_session, EXAMPLE_BLOCK};

    #[test]
    fn test_render_example_session() {
        ut_info!("start");

        let report = PeerReport::new(vec![example_session()]);
        assert_eq!(render_report(&report), EXAMPLE_BLOCK);

        ut_info!("success");
    }

    #[test]
    fn test_render_empty_report() {
        assert_eq!(render_report(&PeerReport::default()), "");
        assert_eq!(render_outcome(&Ok(PeerReport::default())), "");
    }

    #[test]
    fn test_render_blocks_in_order() {
        let first = example_session();
        let mut second = example_session();
        second.conf.neighbor_address = String::from("192.168.1.2");
        second.conf.peer_as = 65002;

        let report = PeerReport::new(vec![first.clone(), second.clone(), first.clone()]);
        let rendered = render_report(&report);

        let expected = format!("{}{}{}", first, second, first);
        assert_eq!(rendered, expected);
        assert_eq!(rendered.lines().count(), 18);
        assert_eq!(rendered.matches("BGP neighbor is: ").count(), 3);
        assert!(rendered.starts_with("BGP neighbor is: 192.168.1.1, remote AS: 65001\n"));
        assert!(rendered[EXAMPLE_BLOCK.len()..]
            .starts_with("BGP neighbor is: 192.168.1.2, remote AS: 65002\n"));
    }

    #[test]
    fn test_single_field_change() {
        let mut session = example_session();
        session.info.out_q = 7;

        let rendered = PeerReport::new(vec![session]);
        let expected = EXAMPLE_BLOCK.replace("BGP OutQ = 0", "BGP OutQ = 7");
        assert_eq!(render_report(&rendered), expected);
    }

    #[test]
    fn test_identical_sessions_render_identically() {
        assert_eq!(example_session().to_string(), example_session().to_string());
    }

    #[test]
    fn test_render_values_verbatim() {
        let mut session = example_session();
        session.conf.peer_as = 4_200_000_000;
        session.conf.id = String::new();
        session.info.bgp_state = String::from("BGP_FSM_ESTABLISHED");

        let rendered = session.to_string();
        assert!(rendered.contains("remote AS: 4200000000\n"));
        assert!(rendered.contains("\tBGP version: 4, remote route ID \n"));
        assert!(rendered.contains("\tBGP state = BGP_FSM_ESTABLISHED, up for 120\n"));
    }

    #[test]
    fn test_render_failure_three_lines() {
        let error = FetchError::Rpc {
            code: 14,
            message: String::from("transport error"),
            details: String::from("connection refused"),
        };
        assert_eq!(
            render_failure(&error),
            "14\ntransport error\nconnection refused\n"
        );

        let error = FetchError::Rpc {
            code: 4,
            message: String::from("deadline exceeded"),
            details: String::new(),
        };
        let rendered = render_outcome(&Err(error));
        assert_eq!(rendered, "4\ndeadline exceeded\n\n");
        assert_eq!(rendered.split_terminator('\n').count(), 3);
    }

    #[test]
    fn test_render_json() {
        let report = PeerReport::new(vec![example_session()]);
        let rendered = render_report_as(&report, OutputFormat::Json).unwrap();
        ut_debug!("{}", rendered);

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["conf"]["neighbor_address"], "192.168.1.1");
        assert_eq!(value[0]["conf"]["peer_as"], 65001);
        assert_eq!(value[0]["info"]["bgp_state"], "6");
        assert_eq!(value[0]["timers"]["state"]["keepalive_interval"], 30);
        assert_eq!(value[0]["timers"]["config"]["hold_time"], 90);
        assert!(rendered.ends_with('\n'));

        let empty = render_report_as(&PeerReport::default(), OutputFormat::Json).unwrap();
        assert_eq!(empty, "[]\n");
    }

    #[test]
    fn test_render_quiet() {
        let mut second = example_session();
        second.conf.neighbor_address = String::from("2001:db8::1");
        second.info.neighbor_address = String::from("2001:db8::1");
        let report = PeerReport::new(vec![example_session(), second]);

        let rendered = render_report_as(&report, OutputFormat::Quiet).unwrap();
        assert_eq!(rendered, "192.168.1.1\n2001:db8::1\n");
        assert_eq!(
            render_report_as(&PeerReport::default(), OutputFormat::Quiet).unwrap(),
            ""
        );
    }

    #[test]
    fn test_render_failure_ignores_format() {
        let outcome: CallOutcome = Err(FetchError::Rpc {
            code: 13,
            message: String::from("internal"),
            details: String::new(),
        });

        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Quiet] {
            assert_eq!(
                render_outcome_as(&outcome, format).unwrap(),
                "13\ninternal\n\n"
            );
        }
    }
}
