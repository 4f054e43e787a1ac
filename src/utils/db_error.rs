/// Returns true if the error is a unique violation on the short-code
/// constraint, which the service layer reports as an alias conflict.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && matches!(db_err.constraint(), Some("links_short_code_key"))
}
