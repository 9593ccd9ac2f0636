//! The demo session: one warehouse, one shop, one customer.

use std::io::Write;

use storefront_core::StoreError;
use storefront_inventory::{Good, StockView};
use storefront_sales::{Order, PayLinkGenerator, Shop};
use storefront_warehouse::Warehouse;

use crate::config::OutputFormat;

/// Replay a full session, writing every listing and result to `out`.
///
/// Stock shortfalls are reported and the session carries on; anything else
/// (I/O, serialization) aborts it.
pub fn run(
    out: &mut impl Write,
    output: OutputFormat,
    pay_links: &mut impl PayLinkGenerator,
) -> anyhow::Result<()> {
    let iphone12 = Good::new("IPhone 12")?;
    let iphone11 = Good::new("IPhone 11")?;

    let warehouse = Warehouse::new();
    let shop = Shop::new(&warehouse);

    warehouse.deliver(&iphone12, 10)?;
    warehouse.deliver(&iphone11, 1)?;
    print_stock(out, "Warehouse", &warehouse)?;

    let mut cart = shop.cart();
    cart.add(&iphone12, 4)?;
    if let Err(err) = cart.add(&iphone11, 3) {
        report_rejection(out, &iphone11, 3, &err)?;
    }
    cart.add(&iphone11, 1)?;
    print_stock(out, "Cart", &cart)?;

    match cart.order(pay_links) {
        Ok(order) => print_order(out, output, &order)?,
        Err(err) => writeln!(out, "Order not placed: {err}")?,
    }
    print_stock(out, "Warehouse", &warehouse)?;

    if let Err(err) = cart.add(&iphone12, 9) {
        report_rejection(out, &iphone12, 9, &err)?;
    }

    Ok(())
}

fn print_stock(out: &mut impl Write, title: &str, view: &impl StockView) -> std::io::Result<()> {
    writeln!(out, "{title}:")?;
    for line in view.list() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn print_order(out: &mut impl Write, output: OutputFormat, order: &Order) -> anyhow::Result<()> {
    match output {
        OutputFormat::Text => {
            writeln!(out, "Pay link: {}", order.pay_link())?;
            print_stock(out, "Order", order)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &order.receipt())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn report_rejection(
    out: &mut impl Write,
    good: &Good,
    count: i64,
    err: &StoreError,
) -> anyhow::Result<()> {
    match err {
        StoreError::InsufficientStock { .. } => {
            tracing::warn!(good = %good, count, "cart add rejected");
            writeln!(out, "Cannot add {count} x {good}: {err}")?;
            Ok(())
        }
        other => Err(other.clone().into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_sales::SequentialPayLinks;

    fn run_to_string(output: OutputFormat) -> String {
        let mut buf = Vec::new();
        run(&mut buf, output, &mut SequentialPayLinks::new("demo-")).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_session_prints_every_step() {
        let text = run_to_string(OutputFormat::Text);
        let expected = "\
Warehouse:
  IPhone 12 - 10
  IPhone 11 - 1
Cannot add 3 x IPhone 11: insufficient stock for IPhone 11: requested 3, available 1
Cart:
  IPhone 12 - 4
  IPhone 11 - 1
Pay link: demo-1
Order:
  IPhone 12 - 4
  IPhone 11 - 1
Warehouse:
  IPhone 12 - 6
  IPhone 11 - 0
Cannot add 9 x IPhone 12: insufficient stock for IPhone 12: requested 9, available 6
";
        assert_eq!(text, expected);
    }

    #[test]
    fn json_session_prints_a_receipt() {
        let text = run_to_string(OutputFormat::Json);
        let start = text.find('{').unwrap();
        let end = text.rfind('}').unwrap();
        let receipt: serde_json::Value = serde_json::from_str(&text[start..=end]).unwrap();

        assert_eq!(receipt["pay_link"], "demo-1");
        assert_eq!(receipt["items"][0]["name"], "IPhone 12");
        assert_eq!(receipt["items"][1]["count"], 1);
    }
}
