/// Which side of the mesh served the storefront catalog. The VM backend only
/// knows about a single product; anything richer came from kubernetes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Vm,
    Kubernetes,
}

impl Backend {
    pub fn classify(product_names: &[String]) -> Backend {
        match product_names.len() {
            1 => Backend::Vm,
            _ => Backend::Kubernetes,
        }
    }
}

/// Running counts of responses per backend, owned by the poll loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub vm: u64,
    pub kubernetes: u64,
}

impl Tally {
    pub fn record(&mut self, backend: Backend) {
        match backend {
            Backend::Vm => self.vm += 1,
            Backend::Kubernetes => self.kubernetes += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.vm + self.kubernetes
    }
}

#[cfg(test)]
mod tests {
    use super::{Backend, Tally};

    #[test]
    fn single_product_is_vm() {
        let products = vec!["Vintage Typewriter".to_string()];
        assert_eq!(Backend::classify(&products), Backend::Vm);
    }

    #[test]
    fn multiple_products_are_kubernetes() {
        let products = vec![
            "Vintage Typewriter".to_string(),
            "Vintage Camera Lens".to_string(),
            "City Bike".to_string(),
        ];
        assert_eq!(Backend::classify(&products), Backend::Kubernetes);
    }

    #[test]
    fn record_increments_exactly_one_counter() {
        let mut tally = Tally::default();

        tally.record(Backend::Vm);
        assert_eq!(tally.vm, 1);
        assert_eq!(tally.kubernetes, 0);

        tally.record(Backend::Kubernetes);
        tally.record(Backend::Kubernetes);
        assert_eq!(tally.vm, 1);
        assert_eq!(tally.kubernetes, 2);
    }

    #[test]
    fn total_matches_recorded_responses() {
        let mut tally = Tally::default();
        let backends = [
            Backend::Vm,
            Backend::Kubernetes,
            Backend::Vm,
            Backend::Vm,
            Backend::Kubernetes,
        ];

        for backend in backends {
            tally.record(backend);
        }

        assert_eq!(tally.total(), backends.len() as u64);
        assert_eq!(tally.total(), tally.vm + tally.kubernetes);
    }
}
