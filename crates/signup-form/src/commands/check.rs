//! Check command - Runs the password policy without submitting anything.

use common::{SignupError, SignupResult};
use domain::validate_password;

use crate::cli::args::CheckArgs;

/// Execute the check command
pub async fn execute(args: CheckArgs) -> SignupResult<()> {
    let violations = validate_password(&args.password);
    if violations.is_empty() {
        println!("Password meets all requirements");
        return Ok(());
    }

    for violation in &violations {
        println!("  - {}", violation);
    }
    Err(SignupError::PasswordRules(violations))
}
