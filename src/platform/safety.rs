use super::Platform;

/// Fixed invocation wrapper every macOS command must carry
pub(crate) const MACOS_PREFIX: &str = "osascript -e '";

/// Fixed invocation wrapper every Windows command must carry; -NoProfile
/// keeps user profile scripts out of the hook
pub(crate) const WINDOWS_PREFIX: &str = "powershell -NoProfile -Command \"";

/// AppleScript constructs that hand control to the system
const MACOS_DENYLIST: &[&str] = &[
    "do shell script",
    "system events",
    "keystroke",
    "key code",
    "administrator privileges",
];

/// PowerShell tokens for code execution, downloads, process spawning, and
/// environment or credential access
const WINDOWS_DENYLIST: &[&str] = &[
    "invoke-expression",
    "invoke-command",
    "& {",
    "invoke-webrequest",
    "invoke-restmethod",
    "downloadstring",
    "downloadfile",
    "net.webclient",
    "start-bitstransfer",
    "start-process",
    "start-job",
    "$env:",
    "get-credential",
    "[environment]::",
];

/// The only type a command is allowed to instantiate
const ALLOWED_NEW_OBJECT: &str = "system.windows.forms.notifyicon";

/// Re-inspect a fully built command independently of the builder that
/// produced it. Returns false on any token that could smuggle a second
/// command in.
pub fn command_is_safe(platform: Platform, command: &str) -> bool {
    if has_chained_command(command) {
        return false;
    }
    match platform {
        Platform::MacOs => macos_command_is_safe(command),
        Platform::Windows => windows_command_is_safe(command),
        Platform::Linux => true,
    }
}

/// A `;`, `|`, `&&`, or `||` followed by an identifier reads as a second
/// command no matter which grammar built the string
fn has_chained_command(command: &str) -> bool {
    let bytes = command.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let separator_len = match bytes[i] {
            b';' => 1,
            b'&' if bytes.get(i + 1) == Some(&b'&') => 2,
            b'|' if bytes.get(i + 1) == Some(&b'|') => 2,
            b'|' => 1,
            _ => {
                i += 1;
                continue;
            }
        };
        let mut j = i + separator_len;
        while j < bytes.len() && bytes[j] == b' ' {
            j += 1;
        }
        if j < bytes.len() && (bytes[j].is_ascii_alphabetic() || bytes[j] == b'_') {
            return true;
        }
        i += separator_len;
    }
    false
}

fn macos_command_is_safe(command: &str) -> bool {
    if command.len() <= MACOS_PREFIX.len()
        || !command.starts_with(MACOS_PREFIX)
        || !command.ends_with('\'')
    {
        return false;
    }
    let lowered = command.to_lowercase();
    MACOS_DENYLIST.iter().all(|token| !lowered.contains(token))
}

fn windows_command_is_safe(command: &str) -> bool {
    if command.len() <= WINDOWS_PREFIX.len()
        || !command.starts_with(WINDOWS_PREFIX)
        || !command.ends_with('"')
    {
        return false;
    }
    let lowered = command.to_lowercase();
    if WINDOWS_DENYLIST.iter().any(|token| lowered.contains(token)) {
        return false;
    }
    new_object_is_whitelisted(&lowered)
}

/// Every `New-Object` in the command must instantiate the notification icon
/// type and nothing else
fn new_object_is_whitelisted(lowered: &str) -> bool {
    let mut rest = lowered;
    while let Some(position) = rest.find("new-object") {
        let after = rest[position + "new-object".len()..].trim_start();
        let type_name: String = after
            .chars()
            .take_while(|c| !c.is_whitespace() && !matches!(c, ';' | ',' | ')' | '"' | '\''))
            .collect();
        if type_name != ALLOWED_NEW_OBJECT {
            return false;
        }
        rest = after;
    }
    true
}
