//! Input rules for the create-product command.

use rust_decimal::Decimal;

use crate::validation::{ValidationFailure, Validator};

use super::CreateProduct;

/// Longest accepted product name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Input rules for [`CreateProduct`].
///
/// The name must not be blank and must fit in [`MAX_NAME_LENGTH`]
/// characters; the price must be strictly positive. Uniqueness of the name is
/// checked by the handler, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateProductValidator;

impl Validator<CreateProduct> for CreateProductValidator {
    fn validate(&self, command: &CreateProduct) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();

        if command.name.trim().is_empty() {
            failures.push(ValidationFailure::new("name", "Product name is required."));
        } else if command.name.chars().count() > MAX_NAME_LENGTH {
            failures.push(ValidationFailure::new(
                "name",
                format!("Product name cannot exceed {MAX_NAME_LENGTH} characters."),
            ));
        }

        if command.price <= Decimal::ZERO {
            failures.push(ValidationFailure::new(
                "price",
                "Price must be greater than zero.",
            ));
        }

        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str, price: Decimal) -> CreateProduct {
        CreateProduct::new(name, "desc", price)
    }

    fn fields(failures: &[ValidationFailure]) -> Vec<&str> {
        failures.iter().map(|f| f.field.as_str()).collect()
    }

    #[test]
    fn valid_command_has_no_failures() {
        let failures = CreateProductValidator.validate(&command("Keyboard", Decimal::new(4999, 2)));
        assert!(failures.is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let failures = CreateProductValidator.validate(&command("", Decimal::ONE));
        assert_eq!(fields(&failures), ["name"]);
        assert_eq!(failures[0].message, "Product name is required.");
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let failures = CreateProductValidator.validate(&command("   ", Decimal::ONE));
        assert_eq!(fields(&failures), ["name"]);
    }

    #[test]
    fn name_at_limit_is_accepted() {
        let name = "x".repeat(MAX_NAME_LENGTH);
        assert!(CreateProductValidator.validate(&command(&name, Decimal::ONE)).is_empty());
    }

    #[test]
    fn name_over_limit_is_rejected() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        let failures = CreateProductValidator.validate(&command(&name, Decimal::ONE));
        assert_eq!(fields(&failures), ["name"]);
        assert_eq!(
            failures[0].message,
            "Product name cannot exceed 100 characters."
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 100 two-byte characters
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(CreateProductValidator.validate(&command(&name, Decimal::ONE)).is_empty());
    }

    #[test]
    fn zero_and_negative_prices_are_rejected() {
        for price in [Decimal::ZERO, Decimal::NEGATIVE_ONE, Decimal::new(-1, 2)] {
            let failures = CreateProductValidator.validate(&command("Mouse", price));
            assert_eq!(fields(&failures), ["price"], "price {price}");
            assert_eq!(failures[0].message, "Price must be greater than zero.");
        }
    }

    #[test]
    fn smallest_positive_price_is_accepted() {
        let failures = CreateProductValidator.validate(&command("Mouse", Decimal::new(1, 2)));
        assert!(failures.is_empty());
    }

    #[test]
    fn name_and_price_failures_co_occur() {
        let failures = CreateProductValidator.validate(&command("", Decimal::ZERO));
        assert_eq!(fields(&failures), ["name", "price"]);
    }
}
