use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Only the event admin may perform this action.")]
    Unauthorized,
    #[msg("The event state has already been initialized.")]
    AlreadyInitialized,
    #[msg("Registration is not open.")]
    RegistrationClosed,
    #[msg("The registration window has expired.")]
    RegistrationExpired,
    #[msg("Close registration before distributing wallets.")]
    RegistrationStillOpen,
    #[msg("Name must not be empty.")]
    NameEmpty,
    #[msg("Name is too long.")]
    NameTooLong,
    #[msg("Description is too long.")]
    DescriptionTooLong,
    #[msg("Bid amount must be greater than zero.")]
    InvalidBidAmount,
    #[msg("Bid amount exceeds the wallet balance.")]
    InsufficientFunds,
    #[msg("No project is currently being pitched.")]
    NoActivePitch,
    #[msg("Bids may only be placed on the project currently being pitched.")]
    ProjectNotBeingPitched,
    #[msg("The bid ledger for this project is full.")]
    BidLedgerFull,
    #[msg("Total budget must be greater than zero.")]
    InvalidBudget,
    #[msg("Team share must not exceed 100%.")]
    InvalidTeamShare,
    #[msg("Wallets have not been distributed yet.")]
    BudgetNotConfigured,
    #[msg("Math operation overflow.")]
    MathOverflow,
}
