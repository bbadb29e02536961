use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Current state of a work session, as derived by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Working,
    OnBreak,
    ClockedOut,
}

/// Actions a staff member can take on the attendance screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockAction {
    ClockIn,
    StartBreak,
    EndBreak,
    ClockOut,
}

impl SessionStatus {
    /// Human label used in CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Working => "working",
            SessionStatus::OnBreak => "on break",
            SessionStatus::ClockedOut => "clocked out",
        }
    }

    /// Stable code used in exports.
    pub fn code(&self) -> &'static str {
        match self {
            SessionStatus::Working => "working",
            SessionStatus::OnBreak => "on_break",
            SessionStatus::ClockedOut => "clocked_out",
        }
    }

    /// Actions permitted on this session. A clocked-out session is terminal.
    pub fn allowed_actions(&self) -> &'static [ClockAction] {
        match self {
            SessionStatus::Working => &[ClockAction::StartBreak, ClockAction::ClockOut],
            SessionStatus::OnBreak => &[ClockAction::EndBreak],
            SessionStatus::ClockedOut => &[],
        }
    }
}

impl ClockAction {
    pub fn label(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "clock in",
            ClockAction::StartBreak => "start break",
            ClockAction::EndBreak => "end break",
            ClockAction::ClockOut => "clock out",
        }
    }

    /// Operation name written to the internal log table.
    pub fn log_operation(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "clock_in",
            ClockAction::StartBreak => "break_start",
            ClockAction::EndBreak => "break_end",
            ClockAction::ClockOut => "clock_out",
        }
    }
}

/// Next actions for an owner, given the status of their latest session.
/// `None` means there is no session at all.
pub fn next_actions(current: Option<SessionStatus>) -> &'static [ClockAction] {
    match current {
        None | Some(SessionStatus::ClockedOut) => &[ClockAction::ClockIn],
        Some(status) => status.allowed_actions(),
    }
}

/// Apply `action` to the current status.
///
/// Clocking in from `None` or `ClockedOut` starts a new session.
/// Clocking out while a break is open is rejected: the break must end first.
pub fn transition(current: Option<SessionStatus>, action: ClockAction) -> AppResult<SessionStatus> {
    use ClockAction::*;
    use SessionStatus::*;

    match (current, action) {
        (None | Some(ClockedOut), ClockIn) => Ok(Working),
        (Some(Working), StartBreak) => Ok(OnBreak),
        (Some(Working), ClockOut) => Ok(ClockedOut),
        (Some(OnBreak), EndBreak) => Ok(Working),
        (Some(OnBreak), ClockOut) => Err(AppError::InvalidTransition(
            "cannot clock out while on break, end the break first".into(),
        )),
        (None | Some(ClockedOut), other) => Err(AppError::InvalidTransition(format!(
            "cannot {} without an active session",
            other.label()
        ))),
        (Some(status), other) => Err(AppError::InvalidTransition(format!(
            "cannot {} while {}",
            other.label(),
            status.label()
        ))),
    }
}
