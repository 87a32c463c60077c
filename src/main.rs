#![deny(unused_imports)]

use tynum::{Command, init_logger, parse_args, run_command};

fn main() {
    let args = std::env::args().collect::<Vec<String>>();

    let result = parse_args(&args).and_then(
        |command| {
            if let Command::Eval { option, .. } = &command {
                init_logger(option.log_level());
            }

            run_command(&command)
        }
    );

    match result {
        Ok(output) => {
            println!("{output}");
        },
        Err(e) => {
            eprintln!("{}", e.render(true));
            std::process::exit(e.exit_code());
        },
    }
}
