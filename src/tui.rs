//! Terminal UI.
//!
//! A line-oriented debugger for poking at the CPU: load registers, execute instructions, and
//! inspect the result.

use std::convert::TryFrom;
use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::cpu::{ArithmeticTarget, Cpu, Flags, Instruction, Register};

lazy_static! {
    /// Matches a decimal or `0x`-prefixed hexadecimal literal.
    static ref VALUE_RE: Regex = Regex::new(r"^(?:0[xX]([[:xdigit:]]+)|([[:digit:]]+))$").unwrap();
}

/// What the prompt should do after a command has run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Parse and execute a debugger command from a line of input, writing any output to `out`.
pub fn parse_command<W: Write>(cpu: &mut Cpu, command: &str, out: &mut W) -> Result<Outcome> {
    let command = command.trim();
    if command.is_empty() || command.starts_with('#') {
        return Ok(Outcome::Continue);
    }

    let components = command.split_whitespace().collect::<Vec<_>>();

    match components[0] {
        "set" => parse_set(cpu, &components[1..])?,
        "flags" => {
            if components.len() != 2 {
                bail!("`flags` takes a single argument");
            }

            let byte = parse_byte(components[1])?;
            cpu.reg.f = Flags::unpack(byte);
        }
        "c" => write!(out, "{}", cpu)?,
        "r" => cpu.reset(),
        "q" => return Ok(Outcome::Quit),
        "?" => {
            writeln!(out, "<INSTR> [TARGET]: execute an instruction, e.g. `ADD B` or `INC HL`")?;
            writeln!(out, "set <reg> <value>: write a register or register pair")?;
            writeln!(out, "flags <value>: load the packed flags byte")?;
            writeln!(out, "c: cpu state")?;
            writeln!(out, "r: reset registers")?;
            writeln!(out, "q: quit")?;
        }
        _ => {
            let (instruction, target) = parse_instruction(&components)?;
            cpu.execute(instruction, target)?;

            writeln!(
                out,
                "{} {}: A {:#04x} F {}",
                instruction, target, cpu.reg.a, cpu.reg.f
            )?;
        }
    }

    Ok(Outcome::Continue)
}

/// Parses `<INSTR> [TARGET]`. A missing target means `A`.
fn parse_instruction(components: &[&str]) -> Result<(Instruction, ArithmeticTarget)> {
    let instruction = components[0]
        .parse::<Instruction>()
        .with_context(|| format!("unknown command `{}`", components[0]))?;

    let target = match components.len() {
        1 => ArithmeticTarget::from(Register::A),
        2 => components[1]
            .parse::<ArithmeticTarget>()
            .with_context(|| format!("unknown target `{}`", components[1]))?,
        _ => bail!("`{}` takes a single optional target", instruction),
    };

    Ok((instruction, target))
}

fn parse_set(cpu: &mut Cpu, args: &[&str]) -> Result<()> {
    if args.len() != 2 {
        bail!("`set` takes a register and a value");
    }

    let target = args[0]
        .parse::<ArithmeticTarget>()
        .with_context(|| format!("unknown register `{}`", args[0]))?;

    match target {
        ArithmeticTarget::Register(register) => cpu.reg.set(register, parse_byte(args[1])?),
        ArithmeticTarget::Pair(pair) => cpu.reg.set_pair(pair, parse_word(args[1])?),
    }

    Ok(())
}

fn parse_word(value: &str) -> Result<u16> {
    let captures = VALUE_RE
        .captures(value)
        .ok_or_else(|| anyhow!("`{}` is not a number", value))?;

    let word = if let Some(hex) = captures.get(1) {
        u16::from_str_radix(hex.as_str(), 16)
    } else {
        captures[2].parse()
    };

    word.with_context(|| format!("`{}` does not fit in 16 bits", value))
}

fn parse_byte(value: &str) -> Result<u8> {
    let word = parse_word(value)?;

    u8::try_from(word).with_context(|| format!("`{}` does not fit in 8 bits", value))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::Outcome;
    use crate::cpu::{Cpu, Flags, Instruction};

    fn run(cpu: &mut Cpu, script: &str) -> String {
        let mut out = Vec::new();

        for line in script.lines() {
            super::parse_command(cpu, line, &mut out).unwrap();
        }

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_word() {
        assert_eq!(super::parse_word("0x174").unwrap(), 0x174);
        assert_eq!(super::parse_word("2570").unwrap(), 2570);
        assert!(super::parse_word("0x10000").is_err());
        assert!(super::parse_word("-1").is_err());
        assert!(super::parse_word("ten").is_err());
    }

    #[test]
    fn parse_byte() {
        assert_eq!(super::parse_byte("0xFF").unwrap(), 0xFF);
        assert!(super::parse_byte("256").is_err());
    }

    #[test]
    fn parse_instruction() {
        let (instruction, target) = super::parse_instruction(&["ccf"]).unwrap();
        assert_eq!(instruction, Instruction::Ccf);
        assert_eq!(target.to_string(), "A");

        assert!(super::parse_instruction(&["ADD", "SP"]).is_err());
        assert!(super::parse_instruction(&["ADD", "B", "C"]).is_err());
        assert!(super::parse_instruction(&["JP"]).is_err());
    }

    #[test]
    fn script() {
        let mut cpu = Cpu::new();

        let out = run(
            &mut cpu,
            indoc! {"
                # scenario: A = 255, ADD 1
                set a 0xFF
                set b 1

                ADD B
                set hl 0x0100
                INC HL
            "},
        );

        assert_eq!(out, "ADD B: A 0x00 F Z-HC\nINC HL: A 0x00 F Z-HC\n");
        assert_eq!(cpu.reg.hl(), 0x0101);
    }

    #[test]
    fn flags_and_state() {
        let mut cpu = Cpu::new();

        let out = run(
            &mut cpu,
            indoc! {"
                flags 0xFF
                set bc 2570
                c
            "},
        );

        assert_eq!(cpu.reg.f, Flags::all());
        assert_eq!(
            out,
            "A 0x00  ZNHC F\nB 0x0a  0x0a C\nD 0x00  0x00 E\nH 0x00  0x00 L\n"
        );
    }

    #[test]
    fn unsupported_target_is_an_error() {
        let mut cpu = Cpu::new();
        let mut out = Vec::new();

        let err = super::parse_command(&mut cpu, "ADDHL B", &mut out).unwrap_err();

        assert_eq!(err.to_string(), "ADDHL cannot operate on B");
        assert!(out.is_empty());
    }

    #[test]
    fn quit() {
        let mut cpu = Cpu::new();
        let mut out = Vec::new();

        assert_eq!(
            super::parse_command(&mut cpu, "q", &mut out).unwrap(),
            Outcome::Quit
        );
        assert_eq!(
            super::parse_command(&mut cpu, "r", &mut out).unwrap(),
            Outcome::Continue
        );
    }
}
