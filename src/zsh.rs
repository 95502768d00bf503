use std::io::{self, Write};

use crate::model::{
    Candidates, CommandArgumentDescriptor, CommandCollection, CommandDescriptor,
    CommandOptionDescriptor,
};

/// Completes position 1 from the `_commands` list declared in the function.
const SUBCOMMAND_SPEC: &str = "\"1: :{_describe 'command' _commands}\"";
/// Captures everything after the sub-command name for the dispatch case.
const REST_SPEC: &str = "'*::arg:->args'";

/// Renders a command tree into a self-contained zsh completion script.
///
/// One function is emitted per visible command node, named
/// `__<namespace>_commands_<path>` where `<path>` is the underscore-joined
/// chain of command names from the root. A node with sub-commands dispatches
/// to its children by name; leaf nodes only declare their own specs.
pub struct ZshCompletionGenerator {
    namespace: String,
    command_name: String,
}

impl ZshCompletionGenerator {
    pub fn new(display_name: &str, command_name: &str) -> Self {
        ZshCompletionGenerator {
            namespace: sanitize_namespace(display_name),
            command_name: command_name.to_string(),
        }
    }

    pub fn generate<W: Write>(&self, w: &mut W, commands: &CommandCollection) -> io::Result<()> {
        writeln!(w, "#!/usr/bin/env zsh")?;
        writeln!(w, "#compdef {}", self.command_name)?;
        writeln!(w)?;
        writeln!(w, "# zsh completion script for {}.", self.command_name)?;
        writeln!(w, "# Generated by zcomp; do not edit by hand.")?;
        writeln!(w)?;

        // The root function carries the primary command's own options and
        // arguments; the primary command never appears as a sub-command.
        let (options, arguments) = match commands.primary() {
            Some(p) => (p.options.as_slice(), p.arguments.as_slice()),
            None => (&[][..], &[][..]),
        };
        let subs = commands.visible_sub_commands();
        self.write_function(w, "root", options, arguments, &subs)?;
        for sub in &subs {
            self.write_command(w, sub, "root")?;
        }

        self.write_onthefly_helper(w)?;
        self.write_entry_point(w)?;
        Ok(())
    }

    fn write_command<W: Write>(
        &self,
        w: &mut W,
        cmd: &CommandDescriptor,
        parent_path: &str,
    ) -> io::Result<()> {
        let path = format!("{parent_path}_{}", cmd.name);
        let subs = cmd
            .sub_commands
            .as_ref()
            .map(|c| c.visible_sub_commands())
            .unwrap_or_default();
        self.write_function(w, &path, &cmd.options, &cmd.arguments, &subs)?;
        for sub in &subs {
            self.write_command(w, sub, &path)?;
        }
        Ok(())
    }

    fn write_function<W: Write>(
        &self,
        w: &mut W,
        path: &str,
        options: &[CommandOptionDescriptor],
        arguments: &[CommandArgumentDescriptor],
        subs: &[&CommandDescriptor],
    ) -> io::Result<()> {
        writeln!(w, "__{}_commands_{}() {{", self.namespace, path)?;

        if !subs.is_empty() {
            writeln!(w, "    local -a _commands")?;
            writeln!(w, "    _commands=(")?;
            for sub in subs {
                writeln!(
                    w,
                    "        '{}:{}'",
                    sub.name,
                    escape_describe(&sub.description)
                )?;
            }
            writeln!(w, "    )")?;
            writeln!(w)?;
        }

        let mut specs: Vec<String> = options
            .iter()
            .filter(|o| !o.hidden)
            .map(|o| self.option_spec(o))
            .collect();
        let mut ordered: Vec<&CommandArgumentDescriptor> = arguments.iter().collect();
        ordered.sort_by_key(|a| a.order);
        for arg in ordered {
            specs.push(self.argument_spec(arg));
        }
        if !subs.is_empty() {
            specs.push(SUBCOMMAND_SPEC.to_string());
            specs.push(REST_SPEC.to_string());
        }

        if specs.is_empty() {
            // Keep the function syntactically valid even for a bare command.
            writeln!(w, "    _arguments")?;
            writeln!(w, "    :")?;
        } else {
            writeln!(w, "    _arguments -C \\")?;
            let last = specs.len() - 1;
            for (i, spec) in specs.iter().enumerate() {
                if i == last {
                    writeln!(w, "        {spec}")?;
                } else {
                    writeln!(w, "        {spec} \\")?;
                }
            }
        }

        if !subs.is_empty() {
            writeln!(w)?;
            writeln!(w, "    case $words[1] in")?;
            for sub in subs {
                writeln!(
                    w,
                    "        {}) __{}_commands_{}_{};;",
                    sub.name, self.namespace, path, sub.name
                )?;
            }
            writeln!(w, "    esac")?;
        }

        writeln!(w, "}}")?;
        writeln!(w)?;
        Ok(())
    }

    fn option_spec(&self, opt: &CommandOptionDescriptor) -> String {
        let desc = escape_description(&opt.description);
        let value = if opt.takes_value {
            format!(": :{}", self.candidate_fragment(&opt.completion, &opt.name))
        } else {
            String::new()
        };

        if opt.short.is_empty() {
            let star = if opt.repeatable { "*" } else { "" };
            format!("'{star}--{}[{desc}]{value}'", opt.name)
        } else {
            // Brace expansion makes the long name and each short alias
            // interchangeable triggers for the same spec.
            let star = if opt.repeatable { "'*'" } else { "" };
            let mut triggers = format!("--{}", opt.name);
            for s in &opt.short {
                triggers.push_str(",-");
                triggers.push(*s);
            }
            format!("{star}{{{triggers}}}'[{desc}]{value}'")
        }
    }

    fn argument_spec(&self, arg: &CommandArgumentDescriptor) -> String {
        format!(
            "'{}:{}:{}'",
            arg.order,
            arg.name,
            self.candidate_fragment(&arg.completion, &arg.name)
        )
    }

    fn candidate_fragment(&self, candidates: &Candidates, context: &str) -> String {
        match candidates {
            // The leading spaces make _arguments run the helper as a command
            // instead of treating it as a completion-function name.
            Candidates::OnTheFly => format!("  __{}_onthefly {context}", self.namespace),
            Candidates::Directory => "_files -/".to_string(),
            Candidates::Keywords { values } => {
                let words: Vec<&str> = values.iter().map(|v| v.value.as_str()).collect();
                format!("({})", words.join(" "))
            }
            Candidates::Default | Candidates::File | Candidates::Unknown => "_files".to_string(),
        }
    }

    fn write_onthefly_helper<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "__{}_onthefly() {{", self.namespace)?;
        writeln!(w, "    local -a _values")?;
        writeln!(
            w,
            "    _values=( ${{(@f)\"$({} --completion-candidates zsh:$1 \"${{words[@]}}\")\"}} )",
            self.command_name
        )?;
        writeln!(w, "    _describe -t values 'values' _values")?;
        writeln!(w, "}}")?;
        writeln!(w)?;
        Ok(())
    }

    fn write_entry_point<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "_{}() {{", self.command_name)?;
        writeln!(w, "    __{}_commands_root", self.namespace)?;
        writeln!(w, "}}")?;
        writeln!(w)?;
        writeln!(w, "_{} \"$@\"", self.command_name)?;
        writeln!(w)?;
        // Some completion loaders look for the binding at the end of the
        // file as well as at the top.
        writeln!(w, "#compdef {}", self.command_name)?;
        Ok(())
    }
}

/// Replaces every character outside `[A-Za-z0-9_]` with a double underscore
/// so the result is safe inside a zsh function name.
pub fn sanitize_namespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
        } else {
            out.push_str("__");
        }
    }
    out
}

// Entries in a `_describe` list split name from description on the first
// unescaped colon, so embedded colons must be escaped.
fn escape_describe(s: &str) -> String {
    s.replace('\'', r"'\''").replace(':', r"\:")
}

// Descriptions inside `[...]` run to the closing bracket.
fn escape_description(s: &str) -> String {
    s.replace('\'', r"'\''").replace(']', r"\]")
}
