#![deny(unused_imports)]

use nested::run;
use nested_config::DemoOption;

fn main() {
    let raw_args = std::env::args().collect::<Vec<String>>();

    let option = match DemoOption::from_cli_args(&raw_args) {
        Ok(option) => option,
        Err(e) => {
            eprintln!("{}", e.render());
            std::process::exit(1);
        },
    };

    // logs go to stderr, so that stdout only has the results
    env_logger::builder()
        .filter_level(option.log_level())
        .parse_default_env()
        .init();

    let output = run(&option);
    output.concat_and_dump_results();

    if output.has_error() {
        std::process::exit(1);
    }
}
