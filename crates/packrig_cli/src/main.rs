mod args;
mod types;

use std::time::Instant;

use ansi_term::Colour;
use args::{EmitArgs, EnvArgs, OutputArgs};
use clap::Parser;

use packrig::{
  assemble_with_env, config_schema, to_json, to_json_pretty, validate, BuildConfig, BuildError,
  BuildOptions, Env,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  env: EnvArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  emit: EmitArgs,
}

fn print_entry_previews(config: &BuildConfig) {
  let previews = config.entry_filename_previews();

  let mut left = 0;
  for (name, _) in &previews {
    if name.len() > left {
      left = name.len();
    }
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (name, filename) in previews {
    println!(
      "{}{:left$}{}{}{}",
      color.paint(&name),
      "",
      dim.paint(" entry"),
      dim.paint(" │ "),
      filename,
      left = left - name.len(),
    );
  }
}

fn print_summary(config: &BuildConfig, start: Instant) {
  let dim = Colour::White.dimmed();

  println!("\n{} {}", dim.paint("mode:"), config.mode);
  if let Some(server) = &config.dev_server {
    println!("{} {}", dim.paint("port:"), server.port);
  }
  println!(
    "{} {} rules, {} plugins, {} aliases",
    dim.paint("wired:"),
    config.rules.len(),
    config.plugins.len(),
    config.resolve.alias.len()
  );
  print_entry_previews(config);

  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  println!("\n{} Assembled in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
}

fn fail(errors: &BuildError) -> ! {
  for error in &**errors {
    println!("{} {}", Colour::Red.paint("Error:"), error);
  }
  std::process::exit(1);
}

fn main() {
  let args = Commands::parse();

  if args.emit.schema {
    match config_schema() {
      Ok(schema) => println!("{schema}"),
      Err(errors) => fail(&errors),
    }
    return;
  }

  let start = Instant::now();
  let config = assemble_with_env(
    &Env::process(),
    BuildOptions {
      mode: args.env.mode.map(Into::into),
      port: args.env.port,
      cwd: args.env.cwd,
      dir: args.output.dir,
      entry_filenames: args.output.entry_filenames,
      asset_filenames: args.output.asset_filenames,
      css_filenames: args.output.css_filenames,
      devtool: args.output.devtool.map(Into::into),
      ..Default::default()
    },
  );

  let warnings = match validate(&config) {
    Ok(warnings) => warnings,
    Err(errors) => fail(&errors),
  };

  if !args.emit.silent {
    for warning in &warnings {
      println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
    }
  }

  let json = match if args.emit.compact { to_json(&config) } else { to_json_pretty(&config) } {
    Ok(json) => json,
    Err(errors) => fail(&errors),
  };

  match &args.emit.out {
    Some(path) => {
      if let Err(err) = std::fs::write(path, &json) {
        fail(&BuildError::msg(format!("Failed to write {}: {err}", path.display())));
      }
      if !args.emit.silent {
        println!("{} {}", Colour::White.dimmed().paint("emitted:"), path.display());
      }
    }
    None => println!("{json}"),
  }

  if !args.emit.silent && args.emit.out.is_some() {
    print_summary(&config, start);
  }
}
