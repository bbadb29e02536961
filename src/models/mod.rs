pub mod session_status;
pub mod session_summary;
pub mod work_session;
