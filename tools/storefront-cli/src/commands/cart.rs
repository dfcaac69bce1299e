//! Cart simulation.

use anyhow::{bail, Context as _, Result};
use clap::ArgMatches;
use serde::Serialize;
use storefront_commerce::cart::{CartSummary, CheckoutOutcome, LineKey};
use storefront_commerce::ids::ProductId;
use storefront_commerce::storefront::Storefront;

use super::CartArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CartReport {
    summary: CartSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    checkout: Option<CheckoutOutcome>,
}

/// One `--add`, `--set` or `--remove` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CartAction<'a> {
    Add(&'a str),
    Set(&'a str),
    Remove(&'a str),
}

/// Run the cart command.
///
/// Actions replay in the order they appear on the command line.
pub fn run(args: CartArgs, matches: Option<&ArgMatches>, ctx: &Context) -> Result<()> {
    let mut store = Storefront::new(ctx.catalog()?);
    let actions = ordered_actions(&args, matches);
    let total = actions.len();

    for (i, action) in actions.into_iter().enumerate() {
        let msg = apply(&mut store, action)?;
        ctx.output.step(i + 1, total, &msg);
    }

    let checkout = args.checkout.then(|| store.checkout());
    let summary = store.cart_summary();

    if ctx.output.is_json() {
        ctx.output.json(&CartReport { summary, checkout });
        return Ok(());
    }

    ctx.output
        .header(&format!("Shopping Cart ({})", store.cart_badge()));
    if summary.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let widths = [24, 28, 10, 5, 10];
    ctx.output
        .table_row(&["LINE", "PRODUCT", "PRICE", "QTY", "SUBTOTAL"], &widths);
    for line in &summary.lines {
        ctx.output.table_row(
            &[
                line.key.to_string().as_str(),
                line.product_name.as_str(),
                line.unit_price.display().as_str(),
                line.quantity.to_string().as_str(),
                line.subtotal.display().as_str(),
            ],
            &widths,
        );
    }

    println!();
    ctx.output.kv("total", &summary.total.display());
    if summary.has_savings() {
        ctx.output.kv("you save", &summary.savings.display());
    }

    if checkout == Some(CheckoutOutcome::Unavailable) {
        ctx.output.warn("Checkout is not available yet");
    }

    Ok(())
}

/// Merge the three flag lists by argv position.
///
/// Without matches the lists run adds, then sets, then removes.
fn ordered_actions<'a>(args: &'a CartArgs, matches: Option<&ArgMatches>) -> Vec<CartAction<'a>> {
    let positions = |id: &str, base: usize, count: usize| -> Vec<usize> {
        matches
            .and_then(|m| m.indices_of(id))
            .map(|indices| indices.collect())
            .unwrap_or_else(|| (base..base + count).collect())
    };

    let adds = args.add.len();
    let sets = args.set.len();
    let mut ordered: Vec<(usize, CartAction<'a>)> =
        Vec::with_capacity(adds + sets + args.remove.len());
    ordered.extend(
        positions("add", 0, adds)
            .into_iter()
            .zip(args.add.iter().map(|s| CartAction::Add(s))),
    );
    ordered.extend(
        positions("set", adds, sets)
            .into_iter()
            .zip(args.set.iter().map(|s| CartAction::Set(s))),
    );
    ordered.extend(
        positions("remove", adds + sets, args.remove.len())
            .into_iter()
            .zip(args.remove.iter().map(|s| CartAction::Remove(s))),
    );
    ordered.sort_by_key(|(position, _)| *position);
    ordered.into_iter().map(|(_, action)| action).collect()
}

/// Apply one action; returns the step message.
fn apply(store: &mut Storefront, action: CartAction<'_>) -> Result<String> {
    match action {
        CartAction::Add(item) => {
            let (id, size, color) = parse_item(item);
            let key = store.add_to_cart(&ProductId::new(id), size, color)?;
            Ok(format!("add {}", key))
        }
        CartAction::Set(change) => {
            let (line, quantity) = change
                .rsplit_once('=')
                .with_context(|| format!("Expected LINE=QTY, got '{}'", change))?;
            let quantity: i64 = quantity
                .trim()
                .parse()
                .with_context(|| format!("Invalid quantity in '{}'", change))?;
            let key = find_line(store, line)?;
            store.update_quantity(&key, quantity);
            Ok(format!("set {} to {}", key, quantity))
        }
        CartAction::Remove(line) => match find_line(store, line) {
            Ok(key) => {
                store.remove_from_cart(&key);
                Ok(format!("remove {}", key))
            }
            Err(_) => Ok(format!("remove {} (not in cart)", line)),
        },
    }
}

/// Split `ID[:SIZE[:COLOR]]`.
fn parse_item(item: &str) -> (&str, Option<&str>, Option<&str>) {
    let mut parts = item.splitn(3, ':');
    let id = parts.next().unwrap_or_default();
    (id, parts.next(), parts.next())
}

fn find_line(store: &Storefront, line: &str) -> Result<LineKey> {
    match store
        .cart()
        .lines()
        .iter()
        .map(|l| l.key())
        .find(|key| key.to_string() == line)
    {
        Some(key) => Ok(key),
        None => bail!("No cart line '{}'", line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Args, Command, FromArgMatches};
    use storefront_commerce::catalog::Catalog;

    #[test]
    fn test_parse_item() {
        assert_eq!(parse_item("1"), ("1", None, None));
        assert_eq!(parse_item("1:M"), ("1", Some("M"), None));
        assert_eq!(parse_item("2:L:Light Blue"), ("2", Some("L"), Some("Light Blue")));
    }

    fn parse(argv: &[&str]) -> (CartArgs, ArgMatches) {
        let matches = CartArgs::augment_args(Command::new("cart"))
            .try_get_matches_from(argv)
            .unwrap();
        let args = CartArgs::from_arg_matches(&matches).unwrap();
        (args, matches)
    }

    fn replay(args: &CartArgs, matches: &ArgMatches) -> Storefront {
        let mut store = Storefront::new(Catalog::seed());
        for action in ordered_actions(args, Some(matches)) {
            apply(&mut store, action).unwrap();
        }
        store
    }

    #[test]
    fn test_actions_follow_argv_order() {
        let (args, matches) = parse(&[
            "cart",
            "--add",
            "1:M:Black",
            "--remove",
            "1-M-Black",
            "--add",
            "1:M:Black",
        ]);
        assert_eq!(
            ordered_actions(&args, Some(&matches)),
            vec![
                CartAction::Add("1:M:Black"),
                CartAction::Remove("1-M-Black"),
                CartAction::Add("1:M:Black"),
            ]
        );

        let store = replay(&args, &matches);
        assert_eq!(store.cart().lines().len(), 1);
        assert_eq!(store.cart().lines()[0].quantity, 1);
    }

    #[test]
    fn test_set_between_adds() {
        let (args, matches) = parse(&[
            "cart",
            "--add",
            "1:M:Black",
            "--set",
            "1-M-Black=5",
            "--add",
            "1:M:Black",
        ]);
        let store = replay(&args, &matches);
        assert_eq!(store.cart().lines()[0].quantity, 6);
    }

    #[test]
    fn test_actions_without_matches_group_by_kind() {
        let (args, _) = parse(&["cart", "-r", "9-S-Red", "-a", "1"]);
        assert_eq!(
            ordered_actions(&args, None),
            vec![CartAction::Add("1"), CartAction::Remove("9-S-Red")]
        );
    }
}
