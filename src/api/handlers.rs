use crate::application::ledger::LendingLedger;
use crate::domain::BookId;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{
    error::ApiError,
    types::{
        AddCopiesRequest, AvailabilityResponse, LateFeeQuery, LateFeeResponse, LendingRequest,
        LendingResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
///
/// 台帳は単一のグローバルロックで保護する。在庫の読み取り・変更・書き込みが
/// リクエスト間で交錯しないため、貸出可能冊数が負になることはない。
pub struct AppState {
    ledger: Mutex<LendingLedger>,
}

impl AppState {
    pub fn new(ledger: LendingLedger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }

    /// 台帳のロックを取得する
    ///
    /// 台帳の操作は途中でパニックしても在庫の不変条件を壊さないため、
    /// ポイズンされたロックもそのまま使う。
    pub fn ledger(&self) -> MutexGuard<'_, LendingLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /books/:book_id/copies - 在庫を追加
///
/// 0以下の冊数は無視される（エラーにはならない）。
pub async fn add_copies(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
    Json(req): Json<AddCopiesRequest>,
) -> Json<AvailabilityResponse> {
    let book_id = BookId::from(book_id);

    let mut ledger = state.ledger();
    ledger.add_book(&book_id, req.quantity);
    let available_copies = ledger.get_available_copies(&book_id);

    Json(AvailabilityResponse {
        book_id,
        available_copies,
    })
}

/// POST /books/:book_id/borrow - 書籍を貸し出す
///
/// 強制されるビジネスルール:
/// - 利用者のアカウントが有効であること
/// - 貸出可能な在庫があること
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
    Json(req): Json<LendingRequest>,
) -> Result<Json<LendingResponse>, ApiError> {
    let book_id = BookId::from(book_id);

    let mut ledger = state.ledger();
    let success = ledger.borrow_book(&book_id, &req.user_id)?;
    let available_copies = ledger.get_available_copies(&book_id);

    Ok(Json(LendingResponse {
        book_id,
        user_id: req.user_id,
        success,
        available_copies,
    }))
}

/// POST /books/:book_id/return - 書籍を返却
///
/// 強制されるビジネスルール:
/// - 利用者がその書籍を借りていること
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
    Json(req): Json<LendingRequest>,
) -> Result<Json<LendingResponse>, ApiError> {
    let book_id = BookId::from(book_id);

    let mut ledger = state.ledger();
    let success = ledger.return_book(&book_id, &req.user_id)?;
    let available_copies = ledger.get_available_copies(&book_id);

    Ok(Json(LendingResponse {
        book_id,
        user_id: req.user_id,
        success,
        available_copies,
    }))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books/:book_id - 貸出可能冊数を取得
///
/// 未登録の書籍は0冊として返す（404にはしない）。
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Json<AvailabilityResponse> {
    let book_id = BookId::from(book_id);
    let available_copies = state.ledger().get_available_copies(&book_id);

    Json(AvailabilityResponse {
        book_id,
        available_copies,
    })
}

/// GET /late-fee - 動的延滞料金を計算
///
/// クエリパラメータ:
/// - overdue_days: 延滞日数（必須、0以上）
/// - bestseller: ベストセラーか（オプション、デフォルトfalse）
/// - premium_member: プレミアム会員か（オプション、デフォルトfalse）
pub async fn late_fee(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LateFeeQuery>,
) -> Result<Json<LateFeeResponse>, ApiError> {
    let fee = state.ledger().calculate_dynamic_late_fee(
        query.overdue_days,
        query.bestseller,
        query.premium_member,
    )?;

    Ok(Json(LateFeeResponse { fee }))
}
