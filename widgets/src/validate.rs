/// Core validation trait all field rules implement.
///
/// A rule is a stateless predicate over borrowed input. Implementations
/// return `Ok(())` for passing input and a descriptive error otherwise;
/// they must not mutate anything or fail for reasons other than the input
/// itself.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
///
/// # Examples
///
/// ```
/// use widgets::validate::Validator;
///
/// struct Lowercase;
/// impl Validator<str> for Lowercase {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.chars().all(|c| !c.is_uppercase()) {
///             Ok(())
///         } else {
///             Err("must be lowercase".to_string())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
