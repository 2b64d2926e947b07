use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::error::Error;
use crate::filename::FileNaming;
use crate::runs::RunNumber;

#[async_trait]
pub trait DataFinder: Send + Sync {
    /// Newest on-disk location whose basename starts with `filename`, if the catalog knows one.
    async fn locate(&self, filename: &str) -> Result<Option<PathBuf>, Error>;

    /// Finds the data file of a run, trying the pre-ADARA name before the ADARA one.
    async fn find_file(&self, instrument: &str, run: RunNumber) -> Result<PathBuf, Error> {
        for naming in FileNaming::PROBE_ORDER {
            let filename = naming.filename(instrument, run);
            match self.locate(&filename).await? {
                Some(location) => return Ok(location),
                None => info!("Failed to find {label} file `{filename}`", label = naming.label()),
            }
        }

        Err(Error::NotFound { instrument: instrument.to_string(), run })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::Error;
    use crate::resolver::DataFinder;

    /// Answers from a fixed set of names and records every probe.
    struct KnownFiles {
        present: Vec<&'static str>,
        probed: Mutex<Vec<String>>,
    }

    impl KnownFiles {
        fn new(present: Vec<&'static str>) -> Self {
            KnownFiles { present, probed: Mutex::new(Vec::new()) }
        }

        fn probed(&self) -> Vec<String> {
            self.probed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DataFinder for KnownFiles {
        async fn locate(&self, filename: &str) -> Result<Option<PathBuf>, Error> {
            self.probed.lock().unwrap().push(filename.to_string());
            Ok(self
                .present
                .iter()
                .find(|name| **name == filename)
                .map(|name| PathBuf::from("/SNS/ARCS/IPTS-1/nexus").join(name)))
        }
    }

    #[tokio::test]
    async fn given_pre_adara_file_when_find_file_then_stop_after_first_probe() {
        // Given
        let finder = KnownFiles::new(vec!["ARCS_12345_event.nxs", "ARCS_12345.nxs.h5"]);

        // When
        let location = finder.find_file("ARCS", 12345).await.unwrap();

        // Then
        assert_eq!(location, PathBuf::from("/SNS/ARCS/IPTS-1/nexus/ARCS_12345_event.nxs"));
        assert_eq!(finder.probed(), vec!["ARCS_12345_event.nxs"]);
    }

    #[tokio::test]
    async fn given_only_adara_file_when_find_file_then_probe_both_in_order() {
        // Given
        let finder = KnownFiles::new(vec!["ARCS_12345.nxs.h5"]);

        // When
        let location = finder.find_file("ARCS", 12345).await.unwrap();

        // Then
        assert_eq!(location, PathBuf::from("/SNS/ARCS/IPTS-1/nexus/ARCS_12345.nxs.h5"));
        assert_eq!(finder.probed(), vec!["ARCS_12345_event.nxs", "ARCS_12345.nxs.h5"]);
    }

    #[tokio::test]
    async fn given_no_file_when_find_file_then_not_found_naming_instrument_and_run() {
        // Given
        let finder = KnownFiles::new(vec![]);

        // When
        let error = finder.find_file("ARCS", 12345).await.unwrap_err();

        // Then
        assert_eq!(finder.probed().len(), 2);
        assert_eq!(error.to_string(), "Failed to find file for instrument ARCS and run 12345");
    }

    #[tokio::test]
    async fn given_catalog_failure_when_find_file_then_propagate_without_second_probe() {
        // Given
        struct Failing;

        #[async_trait]
        impl DataFinder for Failing {
            async fn locate(&self, _filename: &str) -> Result<Option<PathBuf>, Error> {
                Err(Error::Catalog("Failed to get http://catalog. Status code: 503".to_string()))
            }
        }

        // When
        let error = Failing.find_file("ARCS", 1).await.unwrap_err();

        // Then
        assert!(matches!(error, Error::Catalog(_)));
    }
}
