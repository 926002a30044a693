//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::CalculatorError;

impl HttpServer {
    /// Format a user-friendly error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> CalculatorError {
        let error_str = error.to_string();

        if error_str.contains("Address already in use")
            || error_str.contains("os error 48")
            || error_str.contains("os error 98")
        {
            let message = format!(
                r#"
Port {} is already in use.

  Stop the process holding it:  lsof -ti:{} | xargs kill
  Or pick another port:         --port {} or CALCULATOR_PORT={}
"#,
                port,
                port,
                port.saturating_add(1),
                port.saturating_add(1)
            );
            CalculatorError::server(message)
        } else if error_str.contains("Permission denied") || error_str.contains("os error 13") {
            let message = format!(
                r#"
Permission denied for port {}.

  Use a port >= 1024:  --port 8000 or CALCULATOR_PORT=8000
"#,
                port
            );
            CalculatorError::server(message)
        } else {
            CalculatorError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
