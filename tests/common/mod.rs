//! Shared test fixtures for the dashboard integration tests.
//!
//! `setup_sample_dashboard()` writes a small Olist-shaped dataset as CSV
//! files into a temporary data directory and loads it.
//!
//! Sample contents, by order date:
//!
//! | order | date       | items (product -> category, seq)                        | payments                     |
//! |-------|------------|----------------------------------------------------------|------------------------------|
//! | o1    | 2018-01-01 | p1 bed_bath_table 1, p2 health_beauty 2                  | boleto 100                   |
//! | o2    | 2018-06-01 | p1 bed_bath_table 1, p5 computers_accessories 2          | credit_card 150 + 50         |
//! | o3    | 2018-03-15 | p3 sports_leisure 1 + 2, p4 (untranslated) 3             | debit_card 30.5              |
//! | o4    | 2018-03-15 | p9 (no product row) 1                                    | voucher 20                   |
//! | o5    | 2018-08-20 | p6 toys 1, p8 watches_gifts 2, p7 (empty category) 3     | voucher 12.25                |
//!
//! A payment for an unknown order `o99` is never counted.

#![allow(dead_code)]

use chrono::NaiveDate;
use ecommerce_dashboard::{Dashboard, DateRange, Table};
use std::fs;
use std::path::Path;

pub const ORDERS: &str = "\
order_id,customer_id,order_status,order_purchase_timestamp
o1,c1,delivered,2018-01-01 10:00:00
o2,c2,delivered,2018-06-01 12:30:00
o3,c3,delivered,2018-03-15 08:00:00
o4,c4,shipped,2018-03-15 23:59:59
o5,c5,delivered,2018-08-20 09:00:00
";

pub const ORDER_ITEMS: &str = "\
order_id,order_item_id,product_id,seller_id,price
o1,1,p1,s1,10.00
o1,2,p2,s1,25.50
o2,1,p1,s2,10.00
o2,2,p5,s2,99.90
o3,1,p3,s3,5.00
o3,2,p3,s3,5.00
o3,3,p4,s3,7.00
o4,1,p9,s4,1.00
o5,1,p6,s5,3.00
o5,2,p8,s5,80.00
o5,3,p7,s5,4.00
";

pub const PRODUCTS: &str = "\
product_id,product_category_name,product_weight_g
p1,cama_mesa_banho,500
p2,beleza_saude,200
p3,esporte_lazer,900
p4,categoria_sem_traducao,100
p5,informatica_acessorios,300
p6,brinquedos,250
p7,,50
p8,relogios_presentes,120
";

pub const TRANSLATIONS: &str = "\
product_category_name,product_category_name_english
cama_mesa_banho,bed_bath_table
beleza_saude,health_beauty
esporte_lazer,sports_leisure
informatica_acessorios,computers_accessories
brinquedos,toys
relogios_presentes,watches_gifts
moveis_decoracao,furniture_decor
";

pub const PAYMENTS: &str = "\
order_id,payment_sequential,payment_type,payment_installments,payment_value
o1,1,boleto,1,100.00
o2,1,credit_card,3,150.00
o2,2,credit_card,1,50.00
o3,1,debit_card,1,30.50
o4,1,voucher,1,20.00
o5,1,voucher,1,12.25
o99,1,credit_card,1,999.00
";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end).unwrap()
}

/// The full span of the sample orders.
pub fn full_range() -> DateRange {
    range(date(2018, 1, 1), date(2018, 8, 20))
}

/// Write one table's CSV body under its standard file name.
pub fn write_table(dir: &Path, table: Table, body: &str) {
    fs::write(dir.join(table.file_name()), body).unwrap();
}

/// Write all five tables into `dir`.
pub fn write_dataset(
    dir: &Path,
    orders: &str,
    items: &str,
    products: &str,
    translations: &str,
    payments: &str,
) {
    write_table(dir, Table::Orders, orders);
    write_table(dir, Table::OrderItems, items);
    write_table(dir, Table::Products, products);
    write_table(dir, Table::CategoryTranslation, translations);
    write_table(dir, Table::Payments, payments);
}

/// Load a dashboard from the sample dataset.
///
/// Returns `(Dashboard, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for as long as file paths are inspected.
pub fn setup_sample_dashboard() -> (Dashboard, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_dataset(
        tmp_dir.path(),
        ORDERS,
        ORDER_ITEMS,
        PRODUCTS,
        TRANSLATIONS,
        PAYMENTS,
    );
    let dashboard = Dashboard::builder()
        .data_dir(tmp_dir.path())
        .build()
        .unwrap();
    (dashboard, tmp_dir)
}

/// Two orders, one boleto payment in January and one credit card payment
/// in June.
pub fn setup_two_order_dashboard() -> (Dashboard, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_dataset(
        tmp_dir.path(),
        "order_id,order_purchase_timestamp\n\
         O1,2018-01-01 09:15:00\n\
         O2,2018-06-01 18:40:00\n",
        "order_id,order_item_id,product_id\n\
         O1,1,P1\n\
         O2,1,P2\n",
        "product_id,product_category_name\n\
         P1,utilidades_domesticas\n\
         P2,perfumaria\n",
        "product_category_name,product_category_name_english\n\
         utilidades_domesticas,housewares\n\
         perfumaria,perfumery\n",
        "order_id,payment_type,payment_value\n\
         O1,boleto,100\n\
         O2,credit_card,200\n",
    );
    let dashboard = Dashboard::builder()
        .data_dir(tmp_dir.path())
        .build()
        .unwrap();
    (dashboard, tmp_dir)
}
