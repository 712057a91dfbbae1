use crate::base;
use crate::cli;

/// Show the expenses of one category and its share of all spending
#[derive(clap::Parser)]
pub struct Filter {
    /// Category to show, matched case-insensitively against whole names
    category: base::Category,

    #[arg(long, help = cli::sharedopts::JSON_HELP)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Listing<'a> {
    expenses: Vec<Entry<'a>>,
    report: &'a base::Report,
}

#[derive(serde::Serialize)]
struct Entry<'a> {
    id: base::ExpenseId,
    #[serde(flatten)]
    expense: &'a base::Expense,
}

impl Filter {
    pub fn run(self, store: base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let query = self.category.as_str();
        let matching = base::report::filter_by_category(&store, query);
        let report = base::report::category_report(&store, query);
        tracing::info!(category = query, matches = matching.len(), "filtered expenses");

        if self.json {
            let listing = Listing {
                expenses: matching
                    .iter()
                    .map(|&(id, expense)| Entry { id, expense })
                    .collect(),
                report: &report,
            };
            return cli::util::to_json(&listing);
        }
        if matching.is_empty() {
            return Ok(cli::Output::Str(format!(
                "No expenses in category '{}'.",
                self.category
            )));
        }

        let list = base::tree::forlist::Config {
            charset: cli::util::charset_from_config(config),
            newest_first: config.newest_first,
            expenses: matching.into_iter().map(|(id, e)| (id, e.clone())).collect(),
            mark: None,
        };
        let total = base::tree::fortotal::Config {
            charset: cli::util::charset_from_config(config),
            report,
        };
        Ok(cli::Output::Sections(vec![
            cli::Output::TreeForList(list),
            cli::Output::TreeForTotal(total),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const STORE: &str = r#"{"expenses":{
        "1":{"category":"Food","amount":45.5,"date":"2026-02-05","description":"lunch"},
        "2":{"category":"Transport","amount":15,"date":"2026-02-04"},
        "3":{"category":"Food","amount":10,"date":"2026-02-10"}
    }}"#;

    #[test]
    fn test_blank_category_is_rejected() {
        let res = <cli::Root as clap::Parser>::try_parse_from(["", "filter", "  "]);
        assert!(res.is_err());
    }

    cli::testing::generate_testcases![
        (
            no_match,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "filter", "rent"],
                    res: cli::testing::ResultMatcher::OkRendered(
                        "No expenses in category 'Rent'.\n"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_store(STORE),
            }
        ),
        (
            share_of_whole_store,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "filter", " FOOD "],
                    res: cli::testing::ResultMatcher::OkRendered(indoc!(
                        "
                        2026
                        `-- Feb
                            |-- 5th
                            |   `-- 1 -- 45.50  Food: lunch
                            `-- 10th
                                `-- 3 -- 10.00  Food

                        Categories
                        `-- Food -- 55.50  78.72%  (2)
                        Overall
                        |-- Total ---- 55.50
                        |-- Count -------- 2
                        |-- Average -- 27.75
                        `-- Share --- 78.72%
                        "
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_store(STORE),
            }
        ),
        (
            as_json,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "filter", "transport", "--json"],
                    res: cli::testing::ResultMatcher::OkJson(
                        r#"{
                            "expenses": [
                                {"id":2,"category":"Transport","amount":15.0,"date":"2026-02-04","description":""}
                            ],
                            "report": {
                                "categories": [
                                    {"category":"Transport","total":15.0,"count":1,"percentage":21.28}
                                ],
                                "total": 15.0,
                                "count": 1,
                                "average": 15.0,
                                "whole": 70.5
                            }
                        }"#
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_store(STORE),
            }
        ),
    ];
}
