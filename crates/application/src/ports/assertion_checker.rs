//! Assertion checker port

use diskcheck_domain::{
    response::ResponseSpec,
    testing::{Assertion, AssertionResult},
};

/// Port for judging a response against assertions.
pub trait AssertionChecker: Send + Sync {
    /// Runs a single assertion against a response.
    fn check(&self, assertion: &Assertion, response: &ResponseSpec) -> AssertionResult;

    /// Runs assertions in order, stopping after the first failure.
    ///
    /// The failed result is the last element of the returned list.
    fn check_all(&self, assertions: &[Assertion], response: &ResponseSpec) -> Vec<AssertionResult> {
        let mut results = Vec::with_capacity(assertions.len());
        for assertion in assertions {
            let result = self.check(assertion, response);
            let failed = !result.passed;
            results.push(result);
            if failed {
                break;
            }
        }
        results
    }
}
