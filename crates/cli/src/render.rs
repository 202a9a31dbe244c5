//! `shieldgen render`: render a module from names given on the command line.

use clap::Args;

use shieldgen_core::{Layout, OperationSet, render_shield};

/// Arguments of `shieldgen render`.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Query operation names
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub queries: Vec<String>,
    /// Mutation operation names
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub mutations: Vec<String>,
    /// Subscription operation names
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub subscriptions: Vec<String>,
    /// Module specifier to import `Context` from, used verbatim
    #[arg(long, value_name = "SPECIFIER")]
    pub context: String,
    /// Output layout (uniform or classic)
    #[arg(long, default_value = "uniform", value_parser = parse_layout)]
    pub layout: Layout,
}

fn parse_layout(value: &str) -> Result<Layout, String> {
    value.parse().map_err(|err: shieldgen_core::Error| err.to_string())
}

/// Print the shield module for operation names given on the command line.
pub fn run(args: RenderArgs) -> i32 {
    let operations = OperationSet::new(args.queries, args.mutations, args.subscriptions);
    print!("{}", render_shield(&operations, &args.context, args.layout));
    0
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        render: RenderArgs,
    }

    #[test]
    fn test_parse_comma_separated_names() {
        let cli = TestCli::try_parse_from([
            "shieldgen",
            "--queries",
            "getUser,listPosts",
            "--mutations",
            "createPost",
            "--context",
            "../context",
        ])
        .unwrap();
        assert_eq!(cli.render.queries, ["getUser", "listPosts"]);
        assert_eq!(cli.render.mutations, ["createPost"]);
        assert!(cli.render.subscriptions.is_empty());
        assert_eq!(cli.render.layout, Layout::Uniform);
    }

    #[test]
    fn test_parse_layout() {
        let cli = TestCli::try_parse_from([
            "shieldgen",
            "--context",
            "./ctx",
            "--layout",
            "classic",
        ])
        .unwrap();
        assert_eq!(cli.render.layout, Layout::Classic);
        assert!(
            TestCli::try_parse_from(["shieldgen", "--context", "./ctx", "--layout", "fancy"])
                .is_err()
        );
    }
}
