use crate::cli;

/// Checks that a command returned the expected [`anyhow::Result<cli::Output>`].
pub enum ResultMatcher<'a> {
    /// Asserts result is `Ok` and its payload equals the given value.
    OkExact(cli::Output),

    /// Asserts result is `Ok` and its rendered text equals the given string
    /// exactly.
    OkRendered(&'a str),

    /// Asserts result is an `Ok(Output::Str(_))` matching the given glob
    /// pattern. Matching is case-insensitive.
    OkStrGlob(&'a str),

    /// Asserts result is an `Ok(Output::Json(_))` whose parsed value equals
    /// the given JSON text.
    OkJson(&'a str),

    /// Asserts result is `Err` and that the error's `to_string()` matches the
    /// given glob pattern. Matching is case-insensitive.
    ErrGlob(&'a str),
}

fn assert_text_eq(want: &str, got: &str) {
    if want != got {
        text_diff::print_diff(want, got, "\n");
        panic!("diff between want (red) and got (green), see above");
    }
}

fn glob(pattern: &str, s: &str) -> bool {
    wildmatch::WildMatch::new(&pattern.to_lowercase()).matches(&s.to_lowercase())
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, result: anyhow::Result<cli::Output>) {
        match self {
            ResultMatcher::OkExact(want_output) => match &result {
                Ok(got_output) if got_output == want_output => {}
                Ok(got_output) => {
                    assert_text_eq(
                        format!("{:#?}", want_output).as_str(),
                        format!("{:#?}", got_output).as_str(),
                    );
                }
                Err(_) => panic!("\n\twant: {:?}\n\tgot: {:?}\n", want_output, result),
            },
            ResultMatcher::OkRendered(want) => match &result {
                Ok(got_output) => assert_text_eq(want, &got_output.to_string()),
                Err(_) => panic!("\n\twant: Ok({:?})\n\tgot: {:?}\n", want, result),
            },
            ResultMatcher::OkStrGlob(pattern) => {
                let matches = matches!(
                    result,
                    Ok(cli::Output::Str(ref got_string)) if glob(pattern, got_string),
                );
                assert!(
                    matches,
                    "\n\twant matches: Ok({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
            ResultMatcher::OkJson(want) => {
                let want_value = serde_json::from_str::<serde_json::Value>(want).unwrap();
                match &result {
                    Ok(cli::Output::Json(got)) => {
                        let got_value = serde_json::from_str::<serde_json::Value>(got).unwrap();
                        if got_value != want_value {
                            assert_text_eq(
                                &serde_json::to_string_pretty(&want_value).unwrap(),
                                got,
                            );
                        }
                    }
                    _ => panic!("\n\twant: Ok(Json({}))\n\tgot: {:?}\n", want, result),
                }
            }
            ResultMatcher::ErrGlob(pattern) => {
                let matches = matches!(
                    result,
                    Err(ref got_err) if glob(pattern, &got_err.to_string()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Err({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
        }
    }
}
