struct RefKeys {
    entries: Vec<bool>,
}

impl RefKeys {
    fn new(capacity: usize) -> RefKeys {
        RefKeys {
            entries: vec![false; capacity],
        }
    }

    fn contains(&self, key: i64) -> bool {
        self.entries[key as usize]
    }

    fn iter(&self) -> std::vec::IntoIter<i64> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(key, &present)| if present { Some(key as i64) } else { None })
            .collect::<Vec<i64>>()
            .into_iter()
    }

    fn range(&self, low: Bound<i64>, high: Bound<i64>) -> std::vec::IntoIter<i64> {
        let low = match low {
            Bound::Included(low) => low as usize,
            Bound::Excluded(low) => (low + 1) as usize,
            Bound::Unbounded => 0,
        };
        let high = match high {
            Bound::Included(high) => (high + 1) as usize,
            Bound::Excluded(high) => high as usize,
            Bound::Unbounded => self.entries.len(),
        };
        let ok = low < self.entries.len();
        let ok = ok && (high >= low && high <= self.entries.len());
        let entries = if ok {
            &self.entries[low..high]
        } else {
            &self.entries[..0]
        };

        entries
            .iter()
            .enumerate()
            .filter_map(|(off, &present)| {
                if present {
                    Some((low + off) as i64)
                } else {
                    None
                }
            })
            .collect::<Vec<i64>>()
            .into_iter()
    }

    fn reverse(&self, low: Bound<i64>, high: Bound<i64>) -> std::vec::IntoIter<i64> {
        let keys: Vec<i64> = self.range(low, high).collect();
        keys.into_iter().rev().collect::<Vec<i64>>().into_iter()
    }

    fn insert(&mut self, key: i64) -> bool {
        let entry = &mut self.entries[key as usize];
        let new = !*entry;
        *entry = true;
        new
    }

    fn delete(&mut self, key: i64) -> bool {
        let entry = &mut self.entries[key as usize];
        let present = *entry;
        *entry = false;
        present
    }
}

fn random_low_high(size: usize) -> (Bound<i64>, Bound<i64>) {
    let size = size as u64;
    let low = (random::<u64>() % size) as i64;
    let high = (random::<u64>() % size) as i64;
    let low = match random::<u8>() % 3 {
        0 => Bound::Included(low),
        1 => Bound::Excluded(low),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    let high = match random::<u8>() % 3 {
        0 => Bound::Included(high),
        1 => Bound::Excluded(high),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    (low, high)
}
