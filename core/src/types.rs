//! Shared primitive types and the canonical dataset schema.

/// Row position in the loaded dataset, zero-based, header excluded.
pub type RowIndex = usize;

/// A single numeric cell. `None` is an empty (missing) cell.
pub type Cell = Option<f64>;

/// Canonical column names of the participant dataset.
pub mod columns {
    pub const INDIVIDUAL_ID: &str = "Individual_ID";
    pub const AGE: &str = "Age";
    pub const BALANCE: &str = "Balance";
    pub const CONTRIBUTION: &str = "Contribution";
    pub const WITHDRAWAL: &str = "Withdrawal";
    pub const OCCUPATION: &str = "Occupation";
    pub const INCOME_LEVEL: &str = "Income_Level";
    pub const RISK_PROFILE: &str = "Risk_Profile";
    pub const ANNUAL_RETURN_RATE: &str = "Annual_Return_Rate";
    pub const EMPLOYMENT_STATUS: &str = "Employment_Status";
    pub const LIFE_EXPECTANCY: &str = "Life_Expectancy";
    pub const HEALTH_EXPENSE: &str = "Health_Expense";

    /// All columns in file order. Never reorder: the generator writes in this order.
    pub const SCHEMA: [&str; 12] = [
        INDIVIDUAL_ID,
        AGE,
        BALANCE,
        CONTRIBUTION,
        WITHDRAWAL,
        OCCUPATION,
        INCOME_LEVEL,
        RISK_PROFILE,
        ANNUAL_RETURN_RATE,
        EMPLOYMENT_STATUS,
        LIFE_EXPECTANCY,
        HEALTH_EXPENSE,
    ];
}
