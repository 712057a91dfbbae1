use crate::cli;

/// A single command invocation.
pub struct Invocation<'a> {
    /// Command line arguments. The first arg is the binary name and may be
    /// empty.
    pub args: &'a [&'a str],
    pub res: cli::testing::ResultMatcher<'a>,
}

/// Invocations that may change files in the repository directory.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Repository files before the first invocation.
    pub initial_state: cli::testing::StrState<'a>,

    /// Repository contents expected after the last invocation.
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    /// Seeds a temporary directory from `initial_state`, runs and checks each
    /// invocation in order, then compares the directory against
    /// `final_state`.
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);

        for inv in self.invocations {
            let root = match <cli::Root as clap::Parser>::try_parse_from(inv.args) {
                Ok(cmd) => cmd,
                Err(e) => panic!("{:?}: {}", inv.args, e),
            };
            let res = root.run(&fs);
            inv.res.assert_matches(res);
        }

        let got = cli::testing::State::from_fs(&fs);
        if got != self.final_state {
            text_diff::print_diff(
                format!("{:#?}", self.final_state).as_str(),
                format!("{:#?}", got).as_str(),
                "\n",
            );
            panic!("final state differs between want (red) and got (green), see above");
        }
    }
}

/// Invocations that must leave the repository directory untouched.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    pub fn run(self) {
        let tc = MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        };
        tc.run()
    }
}

/// Generates test functions from test cases.
///
/// Accepts one or more tuples of the form `(testcase_name: ident, testcase:
/// Case|MutCase)`. Creates a submodule named `cmd_testcases` in the caller's
/// module, and then for each test case tuple, creates a corresponding function
/// named `testcase_name`.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_testcases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;
