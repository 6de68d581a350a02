//! Shared constants used across the application.
//!
//! User-facing labels are kept here so the renderer, the controller and the
//! tests agree on the exact strings.

/// Remote endpoint used when `BOARD_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbzhawNm5Wulg9AMFuw2x1BwYCoOOnRxmh-mqeXnrcTY8ERQNWm85dGZpDVsliAOZWWdAQ/exec";

/// User agent sent with every request to the remote endpoint.
pub const CLIENT_USER_AGENT: &str = concat!("market-board/", env!("CARGO_PKG_VERSION"));

/// Seconds between automatic refreshes when not configured.
pub const DEFAULT_REFRESH_SECS: u64 = 30;

/// How long a non-loading toast stays visible.
pub const TOAST_SECS: u64 = 3;

/// Number of memo characters shown in a list preview.
pub const MEMO_PREVIEW_CHARS: usize = 40;

// Fallback labels
pub const LABEL_UNTITLED: &str = "제목 없음";
pub const LABEL_OTHER_CATEGORY: &str = "기타";
pub const LABEL_PRICE_UNSET: &str = "가격 미정";
pub const LABEL_LOCATION_UNSET: &str = "장소 미정";
pub const LABEL_ANONYMOUS: &str = "익명";
pub const POST_AUTHOR_ID: &str = "익명User";
pub const CURRENCY_SUFFIX: &str = "원";

// Relative time
pub const LABEL_JUST_NOW: &str = "방금 전";

// Placeholders
pub const EMPTY_POSTS: &str = "등록된 글이 없습니다.";
pub const EMPTY_COMMENTS: &str = "아직 댓글이 없습니다.";

// Messages
pub const MSG_POST_SAVING: &str = "게시글 저장 중...";
pub const MSG_POST_SAVED: &str = "✅ 게시글 등록 완료!";
pub const MSG_POST_ERROR: &str = "오류 발생";
pub const MSG_COMMENT_SAVING: &str = "댓글 저장 중...";
pub const MSG_COMMENT_SAVED: &str = "✅ 댓글 등록 완료!";
pub const MSG_NETWORK_ERROR: &str = "네트워크 오류 발생";
pub const MSG_REJECTED_PREFIX: &str = "❌ 실패: ";

// Blocking alerts
pub const ALERT_MISSING_CONTENT: &str = "내용을 입력해주세요!";
pub const ALERT_NO_POST_SELECTED: &str = "게시글 정보를 읽지 못했습니다. 새로고침 해주세요.";
pub const ALERT_MISSING_TITLE: &str = "제목을 입력해주세요!";
pub const ALERT_MISSING_ITEM: &str = "물품명을 입력해주세요!";
