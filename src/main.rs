use clap::{Parser, ValueEnum};
use treecalc::{
    interpreter::evaluator,
    render::{self, DisplayMode},
};

/// The fixed grammar accepted by treecalc, in Backus-Naur form.
const GRAMMAR: &str = "\
<expression>  ::=  <factor> * <expression>   |   <factor> / <expression>   |   <factor>
<factor>      ::=  <term> + <factor>   |   <term> - <factor>   |   <term>
<term>        ::=  { <expression> }   |   <literal>
<literal>     ::=  0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9";

/// treecalc evaluates a single-line arithmetic expression and draws its
/// binary expression tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tree visualization to print after the result.
    #[arg(short, long, value_enum, default_value = "basic")]
    display: DisplayOption,

    /// Print the accepted grammar instead of evaluating.
    #[arg(long)]
    grammar: bool,

    /// The expression to evaluate, e.g. "{1+2}*3".
    expression: Option<String>,
}

/// Selects the tree visualization from the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum DisplayOption {
    /// Compact indented rendering, not limited by terminal size.
    Basic,
    /// Grid rendering; requires a terminal wide enough for the whole tree.
    Enhanced,
}

impl From<DisplayOption> for DisplayMode {
    fn from(option: DisplayOption) -> Self {
        match option {
            DisplayOption::Basic => Self::Basic,
            DisplayOption::Enhanced => Self::Enhanced,
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.grammar {
        println!("{GRAMMAR}");
    }

    let Some(expression) = args.expression else {
        if !args.grammar {
            eprintln!("Error: An expression is required unless --grammar is given.");
            std::process::exit(2);
        }
        return;
    };

    let tree = treecalc::parse(&expression).unwrap_or_else(|e| {
                                               eprintln!("{e}");
                                               std::process::exit(1);
                                           });

    let result = evaluator::evaluate(&tree).unwrap_or_else(|e| {
                                               eprintln!("{e}");
                                               std::process::exit(1);
                                           });

    println!("{result}");

    match render::render(&tree, args.display.into()) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
