//! 分店補貨需求計算（Min-Max）

use replen_core::{MergedRow, ReplenError};
use rust_decimal::Decimal;

/// 計算補貨數量
///
/// 只有當庫存低於最低庫存時才補到最高庫存，否則為 0；結果永不為負。
/// 最高庫存低於現有庫存（含 最低 > 最高 的列）時同樣為 0。
pub fn reorder_qty(
    branch_stock: Decimal,
    min_stock: Decimal,
    max_stock: Decimal,
) -> replen_core::Result<Decimal> {
    if branch_stock >= min_stock {
        return Ok(Decimal::ZERO);
    }

    let gap = max_stock.checked_sub(branch_stock).ok_or_else(|| {
        ReplenError::CalculationError(format!(
            "補貨數量溢位: 最高庫存 {} - 庫存 {}",
            max_stock, branch_stock
        ))
    })?;
    Ok(gap.max(Decimal::ZERO))
}

/// 計算合併列的補貨數量
pub fn reorder_qty_for(row: &MergedRow) -> replen_core::Result<Decimal> {
    reorder_qty(row.branch_stock, row.min_stock, row.max_stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // 低於最低庫存：補到最高庫存
    #[case(5, 10, 50, 45)]
    // 等於最低庫存：不補貨
    #[case(10, 10, 50, 0)]
    // 高於最低庫存
    #[case(30, 10, 50, 0)]
    // 零庫存
    #[case(0, 1, 12, 12)]
    // 最高庫存異常偏低時不產生負數
    #[case(5, 10, 3, 0)]
    // 負庫存：補到最高庫存
    #[case(-2, 10, 50, 52)]
    fn test_reorder_qty(
        #[case] stock: i64,
        #[case] min: i64,
        #[case] max: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(
            reorder_qty(Decimal::from(stock), Decimal::from(min), Decimal::from(max)).unwrap(),
            Decimal::from(expected)
        );
    }

    #[test]
    fn test_fractional_quantities() {
        let qty = reorder_qty(
            Decimal::new(25, 1), // 2.5
            Decimal::from(3),
            Decimal::new(105, 1), // 10.5
        )
        .unwrap();
        assert_eq!(qty, Decimal::from(8));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = reorder_qty(Decimal::MIN, Decimal::ZERO, Decimal::MAX).unwrap_err();
        assert!(matches!(err, ReplenError::CalculationError(_)));
    }
}
