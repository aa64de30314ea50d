//! Status-service methods for [`MasterClient`].

use crate::client::MasterClient;
use crate::endpoints::{self, status};
use crate::error::Result;
use crate::models::{JrubyStatus, JvmStatus, MasterStatus, ProfilerStatus};

impl MasterClient {
    /// Puppet profiler timings (function, resource and catalog metrics).
    pub async fn profiler(&self) -> Result<ProfilerStatus> {
        endpoints::get_service_status(&self.transport.ctx(), status::SERVICE_PROFILER).await
    }

    /// JRuby pool metrics.
    pub async fn jruby(&self) -> Result<JrubyStatus> {
        endpoints::get_service_status(&self.transport.ctx(), status::SERVICE_JRUBY).await
    }

    /// HTTP route and HTTP client metrics of the master service.
    pub async fn master(&self) -> Result<MasterStatus> {
        endpoints::get_service_status(&self.transport.ctx(), status::SERVICE_MASTER).await
    }

    /// JVM metrics from the status service itself.
    pub async fn service(&self) -> Result<JvmStatus> {
        endpoints::get_service_status(&self.transport.ctx(), status::SERVICE_STATUS).await
    }
}
