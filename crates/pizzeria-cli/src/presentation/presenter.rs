//! Pure construction of screen view models from parsed records.

use pizzeria_types::Pizza;

use super::view_models::{MenuScreenViewModel, RowViewModel};

/// Build the menu screen: one row per record, file order preserved.
///
/// Prices render with exactly two digits after the decimal point,
/// independent of locale, with standard float rounding.
pub fn build_menu_screen(pizzas: &[Pizza]) -> MenuScreenViewModel {
    let rows = pizzas
        .iter()
        .map(|pizza| RowViewModel {
            title: pizza.name.clone(),
            subtitle: format!("Price: {:.2}", pizza.price),
        })
        .collect();

    MenuScreenViewModel { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza(name: &str, price: f64) -> Pizza {
        Pizza {
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let screen = build_menu_screen(&[pizza("Margherita", 8.99), pizza("Pepperoni", 10.5)]);

        assert_eq!(screen.row_count(), 2);
        assert_eq!(screen.row(0).title, "Margherita");
        assert_eq!(screen.row(1).title, "Pepperoni");
    }

    #[test]
    fn test_prices_always_show_two_decimals() {
        let screen = build_menu_screen(&[
            pizza("Plain", 8.0),
            pizza("Pepperoni", 10.5),
            pizza("Fancy", 9.999),
        ]);

        assert_eq!(screen.row(0).subtitle, "Price: 8.00");
        assert_eq!(screen.row(1).subtitle, "Price: 10.50");
        assert_eq!(screen.row(2).subtitle, "Price: 10.00");
    }

    #[test]
    fn test_building_twice_yields_the_same_screen() {
        let catalog = [pizza("Margherita", 8.99)];
        assert_eq!(build_menu_screen(&catalog), build_menu_screen(&catalog));
    }

    #[test]
    fn test_empty_catalog_builds_an_empty_screen() {
        let screen = build_menu_screen(&[]);
        assert_eq!(screen.row_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_row_panics() {
        let screen = build_menu_screen(&[]);
        let _ = screen.row(0);
    }
}
