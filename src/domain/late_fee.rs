use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::LateFeeError;

/// 1日あたりの基本延滞料金
pub const BASE_DAILY_FEE: Decimal = dec!(0.50);

/// ベストセラーの割増率
pub const BESTSELLER_MULTIPLIER: Decimal = dec!(1.5);

/// プレミアム会員の割引率
pub const PREMIUM_MEMBER_MULTIPLIER: Decimal = dec!(0.8);

/// 動的延滞料金を計算する（純粋な関数）
///
/// 計算順序は固定：
/// 1. 延滞日数 × 基本料金
/// 2. ベストセラーなら割増
/// 3. プレミアム会員なら割引
///
/// 丸めは行わない。末尾のゼロは取り除いた値を返す。
///
/// # エラー
/// 延滞日数が負の場合は`LateFeeError::NegativeOverdueDays`を返す
pub fn calculate_dynamic_late_fee(
    overdue_days: i64,
    is_bestseller: bool,
    is_premium_member: bool,
) -> Result<Decimal, LateFeeError> {
    if overdue_days < 0 {
        return Err(LateFeeError::NegativeOverdueDays);
    }

    let mut fee = Decimal::from(overdue_days) * BASE_DAILY_FEE;

    if is_bestseller {
        fee *= BESTSELLER_MULTIPLIER;
    }

    if is_premium_member {
        fee *= PREMIUM_MEMBER_MULTIPLIER;
    }

    Ok(fee.normalize())
}
