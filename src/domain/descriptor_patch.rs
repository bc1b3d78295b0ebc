//! Rewrites a container descriptor so it launches through the startup script.

use crate::domain::StartupConfig;

/// Result of applying the startup-script patch to a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The launch instruction was replaced; holds the new content.
    Patched(String),
    /// The descriptor already mentions the startup script.
    AlreadyPatched,
    /// No `CMD` instruction was found to replace.
    LaunchInstructionMissing,
}

/// Replace the descriptor's final `CMD` with copy-and-invoke of the startup script.
///
/// Only the effective (last) `CMD` is rewritten. A `CMD` continued with a
/// trailing `\` is replaced together with all of its continuation lines.
pub fn patch_launch_instruction(content: &str, startup: &StartupConfig) -> PatchOutcome {
    if content.contains(&startup.script) {
        return PatchOutcome::AlreadyPatched;
    }

    let lines: Vec<&str> = content.lines().collect();
    let Some(target) = lines.iter().rposition(|line| is_cmd_instruction(line)) else {
        return PatchOutcome::LaunchInstructionMissing;
    };

    let mut end = target;
    while end + 1 < lines.len() && continues(lines[end]) {
        end += 1;
    }

    let replacement = launch_via_script(startup);
    let mut patched = String::with_capacity(content.len() + replacement.len());
    for (index, line) in lines.iter().enumerate() {
        if index == target {
            patched.push_str(&replacement);
        } else if index > target && index <= end {
            continue;
        } else {
            patched.push_str(line);
        }
        patched.push('\n');
    }
    if !content.ends_with('\n') {
        patched.pop();
    }

    PatchOutcome::Patched(patched)
}

/// Descriptor instructions that install and run the startup script.
pub fn launch_via_script(startup: &StartupConfig) -> String {
    let target = startup.container_path();
    format!(
        "COPY {script} {target}\nRUN chmod +x {target}\nCMD [\"{target}\"]",
        script = startup.script,
    )
}

/// Line ends with the default Dockerfile escape character.
fn continues(line: &str) -> bool {
    line.trim_end().ends_with('\\')
}

fn is_cmd_instruction(line: &str) -> bool {
    let trimmed = line.trim_start();
    match (trimmed.get(..3), trimmed.get(3..)) {
        (Some(keyword), Some(rest)) => {
            keyword.eq_ignore_ascii_case("CMD") && rest.starts_with([' ', '\t', '['])
        }
        _ => false,
    }
}
