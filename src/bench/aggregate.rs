use std::collections::HashMap;

/// Reduce each group of timings to its arithmetic mean.
///
/// Groups come from [`collect`](crate::bench::collect::collect), which
/// never produces an empty group, so no empty-check is repeated here.
pub fn aggregate(groups: HashMap<String, Vec<f64>>) -> HashMap<String, f64> {
    groups
        .into_iter()
        .map(|(name, values)| {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (name, mean)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_over_repeated_runs() {
        let mut groups = HashMap::new();
        groups.insert("Foo".to_string(), vec![10.0, 20.0]);
        groups.insert("Bar".to_string(), vec![5.0]);

        let means = aggregate(groups);
        assert_eq!(means["Foo"], 15.0);
        assert_eq!(means["Bar"], 5.0);
    }

    #[test]
    fn test_singleton_groups_are_identity() {
        let mut groups = HashMap::new();
        groups.insert("Foo".to_string(), vec![123.45]);
        groups.insert("Bar".to_string(), vec![0.5]);

        let means = aggregate(groups.clone());

        // Re-aggregating the output as singleton groups changes nothing
        let singletons: HashMap<String, Vec<f64>> =
            means.iter().map(|(k, v)| (k.clone(), vec![*v])).collect();
        assert_eq!(aggregate(singletons), means);

        for (name, values) in &groups {
            assert_eq!(means[name], values[0]);
        }
    }
}
