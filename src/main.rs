use std::fs;

use anyhow::{ensure, Context, Result};
use clap::{App, Arg};
use log::info;

use gbvm::cpu::CPU;
use gbvm::mem::{Ram, Rom, SPACE_SIZE};

fn main() -> Result<()> {
  env_logger::init()?;

  let matches = App::new("gbvm")
    .about("Game-Boy-style bytecode interpreter")
    .arg(
      Arg::with_name("program")
        .help("Program image to execute")
        .required(true),
    )
    .arg(
      Arg::with_name("ram")
        .long("ram")
        .takes_value(true)
        .help("Initial working-space image"),
    )
    .arg(
      Arg::with_name("pc")
        .long("pc")
        .takes_value(true)
        .help("Initial program counter (0x-prefixed hex, else decimal)"),
    )
    .arg(
      Arg::with_name("sp")
        .long("sp")
        .takes_value(true)
        .help("Initial stack pointer (0x-prefixed hex, else decimal)"),
    )
    .get_matches();

  let path = matches.value_of("program").unwrap();
  let program =
    fs::read(path).with_context(|| format!("failed to read program image {}", path))?;
  ensure!(
    program.len() <= SPACE_SIZE,
    "program image {} exceeds {} bytes",
    path,
    SPACE_SIZE
  );

  let mut ram = vec![0u8; SPACE_SIZE];
  if let Some(path) = matches.value_of("ram") {
    let image = fs::read(path)
      .with_context(|| format!("failed to read working-space image {}", path))?;
    ensure!(
      image.len() <= SPACE_SIZE,
      "working-space image {} exceeds {} bytes",
      path,
      SPACE_SIZE
    );
    ram[..image.len()].copy_from_slice(&image);
  }

  let mut cpu = CPU::new();
  if let Some(arg) = matches.value_of("pc") {
    cpu.regs.pc = parse_addr(arg).context("bad --pc value")?;
  }
  if let Some(arg) = matches.value_of("sp") {
    cpu.regs.sp = parse_addr(arg).context("bad --sp value")?;
  }

  info!("running {} ({} bytes)", path, program.len());
  cpu.run(&Rom::new(&program), &mut Ram::new(&mut ram));

  let regs = &cpu.regs;
  println!(
    "a={:02x} f={:02x} b={:02x} c={:02x} d={:02x} e={:02x} h={:02x} l={:02x} \
     pc={:04x} sp={:04x}",
    regs.a, regs.f, regs.b, regs.c, regs.d, regs.e, regs.h, regs.l, regs.pc, regs.sp
  );
  Ok(())
}

fn parse_addr(arg: &str) -> Result<u16> {
  let value = if arg.starts_with("0x") || arg.starts_with("0X") {
    u16::from_str_radix(&arg[2..], 16)?
  } else {
    arg.parse()?
  };
  Ok(value)
}
