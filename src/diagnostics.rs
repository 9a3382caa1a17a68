use std::fmt;

/// Subsystem a diagnostic originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugSource {
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other,
}

/// What kind of condition the event reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugKind {
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    Other,
}

/// Urgency; decides the log level the event is reported at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugSeverity {
    Notification,
    Low,
    Medium,
    High,
}

/// One structured diagnostic event.
///
/// Formatted as `SOURCE, KIND, SEVERITY, id: message` and dispatched through
/// the `log` facade, so notification-level chatter only shows up when debug
/// logging is enabled.
#[derive(Debug, Clone)]
pub struct DebugEvent {
    pub source: DebugSource,
    pub kind: DebugKind,
    pub severity: DebugSeverity,
    pub id: u32,
    pub message: String,
}

impl DebugEvent {
    pub fn new(
        source: DebugSource,
        kind: DebugKind,
        severity: DebugSeverity,
        id: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            kind,
            severity,
            id,
            message: message.into(),
        }
    }

    pub fn level(&self) -> log::Level {
        match self.severity {
            DebugSeverity::High => log::Level::Error,
            DebugSeverity::Medium => log::Level::Warn,
            DebugSeverity::Low => log::Level::Info,
            DebugSeverity::Notification => log::Level::Debug,
        }
    }

    pub fn report(&self) {
        log::log!(self.level(), "{}", self);
    }
}

impl fmt::Display for DebugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DebugSource::Api => "API",
            DebugSource::WindowSystem => "WINDOW SYSTEM",
            DebugSource::ShaderCompiler => "SHADER COMPILER",
            DebugSource::ThirdParty => "THIRD PARTY",
            DebugSource::Application => "APPLICATION",
            DebugSource::Other => "OTHER",
        })
    }
}

impl fmt::Display for DebugKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DebugKind::Error => "ERROR",
            DebugKind::DeprecatedBehavior => "DEPRECATED_BEHAVIOR",
            DebugKind::UndefinedBehavior => "UNDEFINED_BEHAVIOR",
            DebugKind::Portability => "PORTABILITY",
            DebugKind::Performance => "PERFORMANCE",
            DebugKind::Marker => "MARKER",
            DebugKind::Other => "OTHER",
        })
    }
}

impl fmt::Display for DebugSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DebugSeverity::Notification => "NOTIFICATION",
            DebugSeverity::Low => "LOW",
            DebugSeverity::Medium => "MEDIUM",
            DebugSeverity::High => "HIGH",
        })
    }
}

impl fmt::Display for DebugEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}: {}",
            self.source, self.kind, self.severity, self.id, self.message
        )
    }
}

/// Report WGSL compilation messages as shader-compiler diagnostics.
/// Returns the number of error-class messages seen.
pub fn report_shader_messages(label: &str, info: &wgpu::CompilationInfo) -> usize {
    let mut errors = 0;

    for message in &info.messages {
        let (kind, severity) = match message.message_type {
            wgpu::CompilationMessageType::Error => {
                errors += 1;
                (DebugKind::Error, DebugSeverity::High)
            }
            wgpu::CompilationMessageType::Warning => (DebugKind::Other, DebugSeverity::Medium),
            wgpu::CompilationMessageType::Info => (DebugKind::Other, DebugSeverity::Notification),
        };

        let text = match &message.location {
            Some(location) => format!(
                "{}: {} (line {}, column {})",
                label, message.message, location.line_number, location.line_position
            ),
            None => format!("{}: {}", label, message.message),
        };

        DebugEvent::new(DebugSource::ShaderCompiler, kind, severity, 0, text).report();
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_formats_all_fields() {
        let event = DebugEvent::new(
            DebugSource::Api,
            DebugKind::Error,
            DebugSeverity::High,
            1281,
            "invalid operation",
        );

        assert_eq!(event.to_string(), "API, ERROR, HIGH, 1281: invalid operation");
    }

    #[test]
    fn severity_maps_to_log_levels() {
        let cases = [
            (DebugSeverity::High, log::Level::Error),
            (DebugSeverity::Medium, log::Level::Warn),
            (DebugSeverity::Low, log::Level::Info),
            (DebugSeverity::Notification, log::Level::Debug),
        ];

        for (severity, expected) in cases {
            let event = DebugEvent::new(
                DebugSource::Other,
                DebugKind::Other,
                severity,
                0,
                "probe",
            );
            assert_eq!(event.level(), expected, "severity {severity}");
        }
    }

    #[test]
    fn severity_orders_notification_lowest() {
        assert!(DebugSeverity::Notification < DebugSeverity::Low);
        assert!(DebugSeverity::Low < DebugSeverity::Medium);
        assert!(DebugSeverity::Medium < DebugSeverity::High);
    }

    #[test]
    fn multiword_sources_use_spaces() {
        assert_eq!(DebugSource::WindowSystem.to_string(), "WINDOW SYSTEM");
        assert_eq!(DebugSource::ShaderCompiler.to_string(), "SHADER COMPILER");
        assert_eq!(DebugKind::DeprecatedBehavior.to_string(), "DEPRECATED_BEHAVIOR");
    }
}
