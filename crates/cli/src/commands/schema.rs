//! Print the gateway's GraphQL schema.

/// Write the SDL to stdout.
pub fn print_sdl() {
    let sdl = retail_analytics_api::graphql::export_sdl();

    #[allow(clippy::print_stdout)]
    {
        println!("{sdl}");
    }
}
