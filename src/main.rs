use gql_realm_gen::cli;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.init_logging();
    command_line_interface.run()
}
