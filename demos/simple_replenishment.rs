//! 簡單補貨計算示例

use replen::{
    report, BranchInventory, ReplenishmentConfig, ReplenishmentEngine, ReplenishmentInput,
    SkuRecord, Table, WarehouseStock,
};
use rust_decimal::Decimal;

fn print_table(title: &str, table: &Table) {
    println!("\n=== {} ({} 筆) ===", title, table.len());
    println!("{}", table.headers.join(" | "));
    for row in &table.rows {
        println!("{}", row.join(" | "));
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== 簡單補貨計算示例 ===");

    let sku_master = vec![
        SkuRecord::new("SKU0001".to_string(), "Product 1".to_string(), "VendorA".to_string())
            .with_category("Medicine".to_string())
            .with_lead_time_days(7),
        SkuRecord::new("SKU0002".to_string(), "Product 2".to_string(), "VendorB".to_string())
            .with_category("Baby Care".to_string())
            .with_lead_time_days(3),
    ];

    let warehouse_stock = vec![
        WarehouseStock::new("SKU0001".to_string(), Decimal::from(30)),
        WarehouseStock::new("SKU0002".to_string(), Decimal::from(15)),
    ];

    let branch_inventory = vec![
        BranchInventory::new(
            "SKU0001".to_string(),
            "BR001".to_string(),
            Decimal::from(5),
            Decimal::from(10),
            Decimal::from(50),
        )
        .with_sales_30d(Decimal::from(30)),
        BranchInventory::new(
            "SKU0001".to_string(),
            "BR002".to_string(),
            Decimal::from(200),
            Decimal::from(10),
            Decimal::from(50),
        )
        .with_sales_30d(Decimal::from(30)),
        BranchInventory::new(
            "SKU0002".to_string(),
            "BR001".to_string(),
            Decimal::ZERO,
            Decimal::from(5),
            Decimal::from(10),
        )
        .with_sales_30d(Decimal::from(12)),
        BranchInventory::new(
            "SKU0002".to_string(),
            "BR003".to_string(),
            Decimal::from(2),
            Decimal::from(5),
            Decimal::from(22),
        ),
    ];

    let config = ReplenishmentConfig::new(Decimal::from(70));
    let engine = ReplenishmentEngine::new(config);
    let result = engine.run(ReplenishmentInput::from_tables(
        branch_inventory,
        warehouse_stock,
        sku_master,
    ))?;

    print_table(
        "All_Transfer_Orders",
        &report::transfer_orders_table(&result.transfer_orders),
    );
    print_table(
        "LPO_Trigger_Transfers",
        &report::lpo_triggers_table(&result.lpo_triggers),
    );
    print_table("LPO_Needs", &report::purchase_needs_table(&result.purchase_needs));
    print_table(
        "Excess_Stock",
        &report::excess_stock_table(&result.excess_findings, engine.config()),
    );

    let summary = result.summary();
    println!("\n採購需求: {} 筆", summary.purchase_needs);
    println!("超量庫存: {} 筆", summary.excess_findings);

    Ok(())
}
