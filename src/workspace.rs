//! Document workspace state and its transitions.
//!
//! A `Workspace` starts empty, is populated by a successful upload and is
//! emptied again by [`Workspace::reset`]. Handlers never mutate it directly:
//! they call a `begin_*` transition, perform their request, and hand the
//! outcome back to the matching `finish_*` transition together with the
//! ticket they were issued. Tickets are numbered per operation class and only
//! the most recently issued one may change state.

use crate::analysis::AnalysisResult;
use crate::api::ApiError;
use crate::error::{Operation, ValidationError, WorkspaceError};
use crate::options::UploadOptions;

pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
}

impl SelectedFile {
    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }
}

/// Which of the three main views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    Loading,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Summary,
    KeyPoints,
    MindMap,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Summary, Tab::KeyPoints, Tab::MindMap, Tab::Chat];

    /// Shared identifier of a tab button and its content panel.
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Summary => "summary",
            Tab::KeyPoints => "keypoints",
            Tab::MindMap => "mindmap",
            Tab::Chat => "chat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Summary => "📋 Summary",
            Tab::KeyPoints => "🎯 Key Points",
            Tab::MindMap => "🧠 Mind Map",
            Tab::Chat => "💬 Chat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: u64,
    pub role: Role,
    pub text: String,
    /// Placeholder shown while the answer is outstanding.
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    seq: u64,
    pub options: UploadOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTicket {
    seq: u64,
    placeholder_id: u64,
    pub session_id: String,
    pub question: String,
}

/// What happened to a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Rejected(WorkspaceError),
    /// A newer request of the same kind was issued, or the workspace was
    /// reset, after this one went out.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workspace {
    data: Option<AnalysisResult>,
    session_id: Option<String>,
    selected_file: Option<SelectedFile>,
    options: UploadOptions,
    phase: Phase,
    active_tab: Tab,
    transcript: Vec<ChatEntry>,
    next_entry_id: u64,
    upload_seq: u64,
    pending_upload: Option<u64>,
    chat_seq: u64,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&AnalysisResult> {
        self.data.as_ref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn options(&self) -> &UploadOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut UploadOptions {
        &mut self.options
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    pub fn is_uploading(&self) -> bool {
        self.pending_upload.is_some()
    }

    pub fn has_unsaved_results(&self) -> bool {
        self.data.is_some()
    }

    /// Selection through the file picker. The picker's `accept` filter is the
    /// only type check on this path.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
    }

    /// Selection through drag and drop. Anything that is not a PDF is refused
    /// and the current selection is kept.
    pub fn drop_file(&mut self, file: Option<SelectedFile>) -> Result<(), WorkspaceError> {
        match file {
            Some(file) if file.is_pdf() => {
                self.selected_file = Some(file);
                Ok(())
            }
            _ => Err(ValidationError::NotAPdf.into()),
        }
    }

    pub fn begin_upload(&mut self) -> Result<UploadTicket, WorkspaceError> {
        if self.selected_file.is_none() {
            return Err(ValidationError::NoFileSelected.into());
        }
        self.upload_seq += 1;
        self.pending_upload = Some(self.upload_seq);
        self.phase = Phase::Loading;
        Ok(UploadTicket {
            seq: self.upload_seq,
            options: self.options.clone(),
        })
    }

    pub fn finish_upload(
        &mut self,
        ticket: &UploadTicket,
        outcome: Result<AnalysisResult, ApiError>,
    ) -> Resolution {
        if self.pending_upload != Some(ticket.seq) {
            return Resolution::Stale;
        }
        self.pending_upload = None;
        match outcome {
            Ok(result) => {
                self.session_id = Some(result.session_id.clone());
                self.data = Some(result);
                self.phase = Phase::Results;
                self.transcript.clear();
                // Answers about the previous document must not land here.
                self.chat_seq += 1;
                Resolution::Applied
            }
            Err(err) => {
                self.phase = Phase::Empty;
                Resolution::Rejected(WorkspaceError::from_api(Operation::Upload, err))
            }
        }
    }

    /// Renderer contract: key points are shown only when non-empty.
    pub fn tab_visible(&self, tab: Tab) -> bool {
        match tab {
            Tab::KeyPoints => self.data.as_ref().is_some_and(AnalysisResult::has_key_points),
            Tab::MindMap => self.data.as_ref().is_some_and(AnalysisResult::has_mind_map),
            Tab::Summary | Tab::Chat => true,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn begin_chat(&mut self, question: &str) -> Result<ChatTicket, WorkspaceError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::EmptyQuestion.into());
        }
        let Some(session_id) = self.session_id.clone() else {
            return Err(ValidationError::NoSession.into());
        };

        self.push_entry(Role::User, question.to_string(), false);
        let placeholder_id = self.push_entry(Role::Assistant, String::new(), true);
        self.chat_seq += 1;
        Ok(ChatTicket {
            seq: self.chat_seq,
            placeholder_id,
            session_id,
            question: question.to_string(),
        })
    }

    /// The placeholder of `ticket` is removed whatever the outcome.
    pub fn finish_chat(&mut self, ticket: &ChatTicket, outcome: Result<String, ApiError>) -> Resolution {
        self.transcript.retain(|entry| entry.id != ticket.placeholder_id);
        if ticket.seq != self.chat_seq {
            return Resolution::Stale;
        }
        match outcome {
            Ok(answer) => {
                self.push_entry(Role::Assistant, answer, false);
                Resolution::Applied
            }
            Err(err) => Resolution::Rejected(WorkspaceError::from_api(Operation::Chat, err)),
        }
    }

    fn push_entry(&mut self, role: Role, text: String, pending: bool) -> u64 {
        self.next_entry_id += 1;
        let id = self.next_entry_id;
        self.transcript.push(ChatEntry {
            id,
            role,
            text,
            pending,
        });
        id
    }

    /// Clipboard text: the summary, followed by the key points when present.
    pub fn copy_text(&self) -> Result<String, WorkspaceError> {
        let data = self.data.as_ref().ok_or(ValidationError::NothingToCopy)?;
        let mut text = data.summary.clone();
        if let Some(key_points) = data.key_points.as_deref().filter(|kp| !kp.is_empty()) {
            text.push_str("\n\nKEY POINTS:\n");
            text.push_str(key_points);
        }
        Ok(text)
    }

    pub fn download_payload(&self) -> Result<&AnalysisResult, WorkspaceError> {
        self.data
            .as_ref()
            .ok_or_else(|| ValidationError::NothingToDownload.into())
    }

    pub fn convert_session(&self) -> Result<&str, WorkspaceError> {
        self.session_id
            .as_deref()
            .ok_or_else(|| ValidationError::NothingToConvert.into())
    }

    /// Back to the initial view. Outstanding tickets become stale.
    pub fn reset(&mut self) {
        let upload_seq = self.upload_seq + 1;
        let chat_seq = self.chat_seq + 1;
        let next_entry_id = self.next_entry_id;
        *self = Self {
            upload_seq,
            chat_seq,
            next_entry_id,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Language;
    use serde_json::json;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.into(),
            mime: PDF_MIME.into(),
        }
    }

    fn result(session: &str, key_points: Option<&str>, mindmap: bool) -> AnalysisResult {
        let mindmap_data = if mindmap {
            json!({"central": "C", "branches": []})
        } else {
            json!(null)
        };
        serde_json::from_value(json!({
            "success": true,
            "session_id": session,
            "metadata": {"page_count": 5, "word_count": 1200, "reading_time": 6,
                         "language": "english", "audience": "general"},
            "summary": "The summary.",
            "key_points": key_points,
            "mindmap_data": mindmap_data
        }))
        .unwrap()
    }

    fn loaded(session: &str) -> Workspace {
        let mut ws = Workspace::new();
        ws.select_file(pdf("paper.pdf"));
        let ticket = ws.begin_upload().unwrap();
        assert_eq!(ws.finish_upload(&ticket, Ok(result(session, None, false))), Resolution::Applied);
        ws
    }

    #[test]
    fn dropping_a_non_pdf_keeps_the_selection() {
        let mut ws = Workspace::new();
        ws.select_file(pdf("first.pdf"));
        let png = SelectedFile {
            name: "image.png".into(),
            mime: "image/png".into(),
        };
        let err = ws.drop_file(Some(png)).unwrap_err();
        assert_eq!(err, WorkspaceError::Validation(ValidationError::NotAPdf));
        assert_eq!(ws.selected_file(), Some(&pdf("first.pdf")));

        assert!(ws.drop_file(None).is_err());
        assert_eq!(ws.selected_file(), Some(&pdf("first.pdf")));

        ws.drop_file(Some(pdf("second.pdf"))).unwrap();
        assert_eq!(ws.selected_file(), Some(&pdf("second.pdf")));
    }

    #[test]
    fn picker_does_not_check_the_type() {
        let mut ws = Workspace::new();
        ws.select_file(SelectedFile {
            name: "notes.txt".into(),
            mime: "text/plain".into(),
        });
        assert!(ws.selected_file().is_some());
    }

    #[test]
    fn upload_without_file_is_refused() {
        let mut ws = Workspace::new();
        let err = ws.begin_upload().unwrap_err();
        assert_eq!(err.to_string(), "Please select a PDF file");
        assert_eq!(ws.phase(), Phase::Empty);
        assert!(!ws.is_uploading());
    }

    #[test]
    fn upload_ticket_captures_options_at_submit_time() {
        let mut ws = Workspace::new();
        ws.select_file(pdf("paper.pdf"));
        ws.options_mut().use_ocr = true;
        ws.options_mut().language = Language::German;
        let ticket = ws.begin_upload().unwrap();
        ws.options_mut().use_ocr = false;
        assert!(ticket.options.use_ocr);
        assert_eq!(ticket.options.language, Language::German);
        assert_eq!(ws.phase(), Phase::Loading);
        assert!(ws.is_uploading());
    }

    #[test]
    fn successful_upload_stores_result_and_session() {
        let ws = loaded("s1");
        assert_eq!(ws.session_id(), Some("s1"));
        assert_eq!(ws.phase(), Phase::Results);
        assert!(!ws.is_uploading());
        assert!(ws.has_unsaved_results());
        assert!(!ws.tab_visible(Tab::KeyPoints));
        assert!(!ws.tab_visible(Tab::MindMap));
        assert!(ws.tab_visible(Tab::Summary));
    }

    #[test]
    fn optional_tabs_follow_the_result() {
        let mut ws = Workspace::new();
        ws.select_file(pdf("paper.pdf"));
        let ticket = ws.begin_upload().unwrap();
        ws.finish_upload(&ticket, Ok(result("s1", Some("1. First point"), true)));
        assert!(ws.tab_visible(Tab::KeyPoints));
        assert!(ws.tab_visible(Tab::MindMap));
        assert_eq!(ws.data().unwrap().key_points.as_deref(), Some("1. First point"));
    }

    #[test]
    fn rendering_results_does_not_change_the_active_tab() {
        let mut ws = Workspace::new();
        ws.select_tab(Tab::Chat);
        ws.select_file(pdf("paper.pdf"));
        let ticket = ws.begin_upload().unwrap();
        ws.finish_upload(&ticket, Ok(result("s1", None, false)));
        assert_eq!(ws.active_tab(), Tab::Chat);
    }

    #[test]
    fn failed_upload_returns_to_empty_view() {
        let mut ws = Workspace::new();
        ws.select_file(pdf("paper.pdf"));
        let ticket = ws.begin_upload().unwrap();
        let resolution = ws.finish_upload(
            &ticket,
            Err(ApiError::Server(Some("Could not extract text. Try enabling OCR for scanned PDFs.".into()))),
        );
        assert_eq!(
            resolution,
            Resolution::Rejected(WorkspaceError::Server(
                "Could not extract text. Try enabling OCR for scanned PDFs.".into()
            ))
        );
        assert_eq!(ws.phase(), Phase::Empty);
        assert!(!ws.is_uploading());
        assert!(ws.data().is_none());
    }

    #[test]
    fn transport_failure_uses_generic_upload_message() {
        let mut ws = Workspace::new();
        ws.select_file(pdf("paper.pdf"));
        let ticket = ws.begin_upload().unwrap();
        let resolution = ws.finish_upload(&ticket, Err(ApiError::Transport("offline".into())));
        assert_eq!(
            resolution,
            Resolution::Rejected(WorkspaceError::Transport(
                "Failed to process PDF. Please try again.".into()
            ))
        );
    }

    #[test]
    fn stale_upload_reply_is_discarded() {
        let mut ws = Workspace::new();
        ws.select_file(pdf("paper.pdf"));
        let first = ws.begin_upload().unwrap();
        let second = ws.begin_upload().unwrap();

        assert_eq!(ws.finish_upload(&second, Ok(result("new", None, false))), Resolution::Applied);
        assert_eq!(ws.finish_upload(&first, Ok(result("old", None, false))), Resolution::Stale);
        assert_eq!(ws.session_id(), Some("new"));
    }

    #[test]
    fn reset_invalidates_inflight_upload() {
        let mut ws = Workspace::new();
        ws.select_file(pdf("paper.pdf"));
        let ticket = ws.begin_upload().unwrap();
        ws.reset();
        assert!(!ws.is_uploading());
        assert_eq!(ws.finish_upload(&ticket, Ok(result("s1", None, false))), Resolution::Stale);
        assert!(ws.data().is_none());
        assert_eq!(ws.phase(), Phase::Empty);
    }

    #[test]
    fn empty_question_is_refused_without_touching_transcript() {
        let mut ws = loaded("s1");
        let err = ws.begin_chat("   \n").unwrap_err();
        assert_eq!(err, WorkspaceError::Validation(ValidationError::EmptyQuestion));
        assert!(ws.transcript().is_empty());
    }

    #[test]
    fn question_without_session_is_refused() {
        let mut ws = Workspace::new();
        let err = ws.begin_chat("What is this?").unwrap_err();
        assert_eq!(err.to_string(), "Please upload a PDF first");
        assert!(ws.transcript().is_empty());
    }

    #[test]
    fn chat_round_trip_replaces_placeholder_with_answer() {
        let mut ws = loaded("s1");
        let ticket = ws.begin_chat("  What is the conclusion?  ").unwrap();
        assert_eq!(ticket.session_id, "s1");
        assert_eq!(ticket.question, "What is the conclusion?");

        let roles: Vec<(Role, bool)> = ws.transcript().iter().map(|e| (e.role, e.pending)).collect();
        assert_eq!(roles, vec![(Role::User, false), (Role::Assistant, true)]);

        let resolution = ws.finish_chat(&ticket, Ok("The paper concludes X.".into()));
        assert_eq!(resolution, Resolution::Applied);
        let transcript = ws.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].text, "What is the conclusion?");
        assert_eq!(transcript[1].role, Role::Assistant);
        assert_eq!(transcript[1].text, "The paper concludes X.");
        assert!(transcript.iter().all(|e| !e.pending));
    }

    #[test]
    fn chat_failure_keeps_user_bubble_and_drops_placeholder() {
        let mut ws = loaded("s1");
        let ticket = ws.begin_chat("Why?").unwrap();
        let resolution = ws.finish_chat(&ticket, Err(ApiError::Server(None)));
        assert_eq!(
            resolution,
            Resolution::Rejected(WorkspaceError::Server("Failed to get response".into()))
        );
        assert_eq!(ws.transcript().len(), 1);
        assert_eq!(ws.transcript()[0].role, Role::User);

        let ticket = ws.begin_chat("Again?").unwrap();
        let resolution = ws.finish_chat(&ticket, Err(ApiError::Transport("reset".into())));
        assert_eq!(
            resolution,
            Resolution::Rejected(WorkspaceError::Transport(
                "Failed to send message. Please try again.".into()
            ))
        );
        assert!(ws.transcript().iter().all(|e| !e.pending));
    }

    #[test]
    fn older_chat_answer_is_discarded() {
        let mut ws = loaded("s1");
        let first = ws.begin_chat("one").unwrap();
        let second = ws.begin_chat("two").unwrap();

        assert_eq!(ws.finish_chat(&first, Ok("late".into())), Resolution::Stale);
        assert_eq!(ws.finish_chat(&second, Ok("fresh".into())), Resolution::Applied);

        let texts: Vec<&str> = ws.transcript().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "fresh"]);
    }

    #[test]
    fn new_upload_clears_transcript_and_outstanding_chats() {
        let mut ws = loaded("s1");
        let ticket = ws.begin_chat("question").unwrap();
        let upload = ws.begin_upload().unwrap();
        ws.finish_upload(&upload, Ok(result("s2", None, false)));
        assert!(ws.transcript().is_empty());
        assert_eq!(ws.finish_chat(&ticket, Ok("answer".into())), Resolution::Stale);
        assert!(ws.transcript().is_empty());
    }

    #[test]
    fn copy_requires_a_result() {
        let ws = Workspace::new();
        assert_eq!(
            ws.copy_text().unwrap_err(),
            WorkspaceError::Validation(ValidationError::NothingToCopy)
        );
    }

    #[test]
    fn copy_text_appends_key_points() {
        let ws = loaded("s1");
        assert_eq!(ws.copy_text().unwrap(), "The summary.");

        let mut ws = Workspace::new();
        ws.select_file(pdf("paper.pdf"));
        let ticket = ws.begin_upload().unwrap();
        ws.finish_upload(&ticket, Ok(result("s1", Some("1. A\n2. B"), false)));
        assert_eq!(ws.copy_text().unwrap(), "The summary.\n\nKEY POINTS:\n1. A\n2. B");
    }

    #[test]
    fn exports_require_their_inputs() {
        let ws = Workspace::new();
        assert_eq!(ws.download_payload().unwrap_err().to_string(), "No summary to download");
        assert_eq!(ws.convert_session().unwrap_err().to_string(), "No document to convert");

        let ws = loaded("s9");
        assert_eq!(ws.download_payload().unwrap().session_id, "s9");
        assert_eq!(ws.convert_session().unwrap(), "s9");
    }

    #[test]
    fn reset_restores_initial_view_from_any_state() {
        let mut ws = loaded("s1");
        ws.select_tab(Tab::MindMap);
        ws.options_mut().include_mindmap = true;
        let _ = ws.begin_chat("pending question").unwrap();

        ws.reset();
        assert!(ws.data().is_none());
        assert!(ws.session_id().is_none());
        assert!(ws.selected_file().is_none());
        assert!(ws.transcript().is_empty());
        assert_eq!(ws.phase(), Phase::Empty);
        assert_eq!(ws.active_tab(), Tab::Summary);
        assert_eq!(ws.options(), &UploadOptions::default());
        assert!(!ws.tab_visible(Tab::KeyPoints));
        assert!(!ws.tab_visible(Tab::MindMap));
        assert!(!ws.has_unsaved_results());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut ws = Workspace::new();
        ws.reset();
        let once = (ws.phase(), ws.active_tab(), ws.data().cloned(), ws.session_id().map(str::to_owned));
        ws.reset();
        let twice = (ws.phase(), ws.active_tab(), ws.data().cloned(), ws.session_id().map(str::to_owned));
        assert_eq!(once, twice);
        assert_eq!(once.1, Tab::Summary);
    }
}
