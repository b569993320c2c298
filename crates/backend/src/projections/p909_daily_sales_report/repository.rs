use anyhow::Result;
use contracts::projections::p909_daily_sales_report::SaleRecordDto;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "p909_sales")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Canonical UTC timestamp, see `report_day::to_storage_timestamp`
    pub sale_date: String,
    #[sea_orm(nullable)]
    pub order_id: Option<String>,

    pub customer_name: String,
    pub product_name: String,
    #[sea_orm(nullable)]
    pub variant: Option<String>,

    // Sums
    #[sea_orm(nullable)]
    pub quantity: Option<i64>,
    #[sea_orm(nullable)]
    pub unit_price: Option<f64>,
    #[sea_orm(nullable)]
    pub subtotal: Option<f64>,
    #[sea_orm(nullable)]
    pub layout_fee: Option<f64>,
    #[sea_orm(nullable)]
    pub total_amount: Option<f64>,

    // Info fields
    pub order_source: String,
    #[sea_orm(nullable)]
    pub employee_name: Option<String>,
    #[sea_orm(nullable)]
    pub employee_email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_dto(self) -> SaleRecordDto {
        SaleRecordDto {
            id: self.id,
            sale_date: self.sale_date,
            order_id: self.order_id,
            customer_name: self.customer_name,
            product_name: self.product_name,
            variant: self.variant,
            quantity: self.quantity,
            unit_price: self.unit_price,
            subtotal: self.subtotal,
            layout_fee: self.layout_fee,
            total_amount: self.total_amount,
            order_source: Some(self.order_source),
            employee_name: self.employee_name,
            employee_email: self.employee_email,
        }
    }
}

/// Rows with `from <= sale_date < to`, ascending by sale_date.
///
/// Both bounds must be in canonical storage form so that text comparison
/// matches chronological order.
pub async fn list_in_interval(
    db: &DatabaseConnection,
    from: &str,
    to: &str,
) -> Result<Vec<Model>> {
    let items = Entity::find()
        .filter(Column::SaleDate.gte(from))
        .filter(Column::SaleDate.lt(to))
        .order_by_asc(Column::SaleDate)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(items)
}

pub async fn insert_entry(db: &DatabaseConnection, entry: &Model) -> Result<()> {
    let active = ActiveModel {
        id: Set(entry.id.clone()),
        sale_date: Set(entry.sale_date.clone()),
        order_id: Set(entry.order_id.clone()),
        customer_name: Set(entry.customer_name.clone()),
        product_name: Set(entry.product_name.clone()),
        variant: Set(entry.variant.clone()),
        quantity: Set(entry.quantity),
        unit_price: Set(entry.unit_price),
        subtotal: Set(entry.subtotal),
        layout_fee: Set(entry.layout_fee),
        total_amount: Set(entry.total_amount),
        order_source: Set(entry.order_source.clone()),
        employee_name: Set(entry.employee_name.clone()),
        employee_email: Set(entry.employee_email.clone()),
    };

    Entity::insert(active).exec(db).await?;
    Ok(())
}
