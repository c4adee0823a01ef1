//! Request dispatch and settling
//!
//! Every user intent (convert, history, clear, rejected input) takes a new
//! sequence number. Requests run on the app's tokio runtime and report back
//! through a channel; the UI thread applies an outcome only if its sequence
//! number is still the latest.

use super::App;
use crate::client::RequestHandler;
use crate::constants::*;
use crate::display::DisplayState;
use crate::types::{Action, Completion, ConversionRequest};
use eframe::egui;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

/// Hands out sequence numbers; only the most recent may touch the display
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// Work item for one request
#[derive(Debug)]
pub(crate) enum Job {
    Convert(ConversionRequest),
    History,
}

impl Job {
    fn action(&self) -> Action {
        match self {
            Job::Convert(_) => Action::Convert,
            Job::History => Action::History,
        }
    }
}

/// Input text, what is on screen, and which request may still change it
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) input: String,
    pub(crate) display: DisplayState,
    pub(crate) tracker: RequestTracker,
    pub(crate) pending: Option<Action>,
}

impl Session {
    /// Validate the input and start a conversion. Empty input is shown
    /// locally and still supersedes whatever was in flight.
    pub fn start_convert(&mut self) -> Option<(u64, Job)> {
        let seq = self.tracker.issue();
        match ConversionRequest::new(&self.input) {
            Ok(request) => {
                info!(seq, input = request.raw_input(), "Converting measurement");
                self.display.show_progress(MSG_CONVERTING);
                self.pending = Some(Action::Convert);
                Some((seq, Job::Convert(request)))
            }
            Err(e) => {
                debug!(seq, "Empty input, conversion not sent");
                self.pending = None;
                self.display.show_validation_error(e.to_string());
                None
            }
        }
    }

    pub fn start_history(&mut self) -> (u64, Job) {
        let seq = self.tracker.issue();
        info!(seq, "Fetching measurement history");
        self.display.show_progress(MSG_LOADING_HISTORY);
        self.pending = Some(Action::History);
        (seq, Job::History)
    }

    pub fn clear(&mut self) {
        let seq = self.tracker.issue();
        debug!(seq, "Clearing display");
        self.pending = None;
        self.display.clear();
        self.input.clear();
    }

    /// Apply a finished request if it is still the latest intent.
    pub fn settle(&mut self, completion: &Completion) -> bool {
        if !self.tracker.is_latest(completion.seq) {
            debug!(
                seq = completion.seq,
                latest = self.tracker.latest(),
                action = ?completion.action,
                "Discarding stale outcome"
            );
            return false;
        }
        self.display.apply(&completion.outcome);
        self.pending = None;
        true
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}

/// Run one request in the background and post its outcome to `tx`.
pub(crate) fn spawn_job(
    runtime: &tokio::runtime::Handle,
    handler: RequestHandler,
    job: Job,
    seq: u64,
    tx: UnboundedSender<Completion>,
    ctx: egui::Context,
) {
    runtime.spawn(async move {
        let action = job.action();
        let outcome = match &job {
            Job::Convert(request) => handler.convert(request.raw_input()).await,
            Job::History => handler.fetch_history().await,
        };
        debug!(seq, ?action, success = outcome.is_success(), "Request finished");
        // Receiver is only gone once the window has closed
        let _ = tx.send(Completion { seq, action, outcome });
        ctx.request_repaint();
    });
}

impl App {
    pub fn submit_convert(&mut self, ctx: &egui::Context) {
        if let Some((seq, job)) = self.session.start_convert() {
            self.dispatch(ctx, seq, job);
        }
    }

    pub fn submit_history(&mut self, ctx: &egui::Context) {
        let (seq, job) = self.session.start_history();
        self.dispatch(ctx, seq, job);
    }

    pub fn clear_all(&mut self) {
        self.session.clear();
        self.focus_input = true;
    }

    /// Drain finished requests. Called once per frame.
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.session.settle(&completion);
        }
    }

    fn dispatch(&self, ctx: &egui::Context, seq: u64, job: Job) {
        spawn_job(
            self.runtime.handle(),
            self.handler.clone(),
            job,
            seq,
            self.completion_tx.clone(),
            ctx.clone(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ResultView;
    use crate::types::{Outcome, Payload};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(seq: u64, action: Action, outcome: Outcome) -> Completion {
        Completion {
            seq,
            action,
            outcome,
        }
    }

    fn session_with_input(input: &str) -> Session {
        Session {
            input: input.to_string(),
            ..Session::default()
        }
    }

    #[test]
    fn tracker_issues_increasing_numbers() {
        let mut tracker = RequestTracker::default();
        let a = tracker.issue();
        let b = tracker.issue();
        assert!(b > a);
        assert!(tracker.is_latest(b));
        assert!(!tracker.is_latest(a));
    }

    #[test]
    fn convert_trims_input_and_shows_progress() {
        let mut session = session_with_input("  aa zza ");
        let (_, job) = session.start_convert().unwrap();
        match job {
            Job::Convert(request) => assert_eq!(request.raw_input(), "aa zza"),
            other => panic!("unexpected job: {:?}", other),
        }
        assert_eq!(session.display.result, Some(ResultView::Text("Converting...".into())));
        assert_eq!(session.pending, Some(Action::Convert));
    }

    #[test]
    fn older_request_resolving_last_is_discarded() {
        let mut session = session_with_input("abc");
        let (first, _) = session.start_convert().unwrap();
        let (second, _) = session.start_history();

        let late = completion(first, Action::Convert, Outcome::Failure("Server unavailable.".into()));
        assert!(!session.settle(&late));
        assert_eq!(session.display.result, Some(ResultView::Text("Loading history...".into())));
        assert!(session.is_busy());

        let current = completion(
            second,
            Action::History,
            Outcome::Success(Payload::Message("No history found.".into())),
        );
        assert!(session.settle(&current));
        assert_eq!(session.display.result, Some(ResultView::Text("No history found.".into())));
        assert!(!session.is_busy());
    }

    #[test]
    fn clear_supersedes_in_flight_request() {
        let mut session = session_with_input("abc");
        let (seq, _) = session.start_convert().unwrap();
        session.clear();

        assert!(session.input.is_empty());
        assert!(!session.is_busy());

        let done = completion(seq, Action::Convert, Outcome::Success(Payload::Conversion(json!([1]))));
        assert!(!session.settle(&done));
        assert_eq!(session.display, DisplayState::default());
    }

    #[test]
    fn empty_convert_supersedes_in_flight_request() {
        let mut session = Session::default();
        let (seq, _) = session.start_history();

        session.input = "   ".into();
        assert!(session.start_convert().is_none());
        assert_eq!(
            session.display.error.as_deref(),
            Some("Please enter a measurement string.")
        );
        assert!(!session.is_busy());

        let done = completion(
            seq,
            Action::History,
            Outcome::Success(Payload::Message("No history found.".into())),
        );
        assert!(!session.settle(&done));
        assert_eq!(
            session.display.error.as_deref(),
            Some("Please enter a measurement string.")
        );
        assert_eq!(session.display.result, None);
    }

    #[tokio::test]
    async fn spawned_job_reports_back_with_its_sequence() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/convert-measurements/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([2, 7])))
            .expect(1)
            .mount(&server)
            .await;

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut session = session_with_input("abbcc");
        let (seq, job) = session.start_convert().unwrap();
        spawn_job(
            &tokio::runtime::Handle::current(),
            RequestHandler::new(&server.uri()),
            job,
            seq,
            tx,
            egui::Context::default(),
        );

        let done = rx.recv().await.unwrap();
        assert_eq!(done.seq, seq);
        assert_eq!(done.action, Action::Convert);
        assert!(session.settle(&done));
        assert_eq!(session.display.result, Some(ResultView::Text("Result: [2,7]".into())));
    }
}
