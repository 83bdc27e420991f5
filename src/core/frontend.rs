use crate::domain::ports::DataSource;

/// Displays whatever its data source returns. The source is injected, so
/// the front end never names a concrete backend.
pub struct FrontEnd<D: DataSource> {
    source: D,
}

impl<D: DataSource> FrontEnd<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }

    pub fn display_data(&self) -> String {
        let data = self.source.fetch_data();
        let line = format!("Display data: {}", data);
        tracing::info!("{}", line);
        line
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn into_source(self) -> D {
        self.source
    }
}
