use super::builder::{build_prefix_tree, canonicalize, count_item_frequencies, dedup_transaction};
use super::dense::transactions_from_dense;
use super::header::{FrequencyTable, HeaderTable};
use super::mining::{conditional_pattern_bases, enumerate_patterns};
use super::storage::{ConditionalPatternBase, PatternTable};
use super::tree::{Item, PrefixTree};
use crate::config::TreeConfig;
use crate::error::FpError;
use log::info;
use ndarray::ArrayView2;

/// FP-tree miner. Holds the configuration and, once [`fit`](Self::fit) has
/// run, every structure derived from the last fitted input.
#[derive(Debug, Clone)]
pub struct FPTree<T: Item> {
    config: TreeConfig,
    frequencies: FrequencyTable<T>,
    header_table: HeaderTable<T>,
    transactions: Vec<Vec<T>>,
    tree: Option<PrefixTree<T>>,
    conditional_bases: Vec<(T, ConditionalPatternBase<T>)>,
    patterns: PatternTable<T>,
}

impl<T: Item> FPTree<T> {
    pub fn new(min_support: usize) -> Result<Self, FpError> {
        Self::with_config(TreeConfig::new(min_support))
    }

    pub fn with_config(config: TreeConfig) -> Result<Self, FpError> {
        config.validate()?;
        Ok(Self {
            config,
            frequencies: FrequencyTable::default(),
            header_table: HeaderTable::default(),
            transactions: Vec::new(),
            tree: None,
            conditional_bases: Vec::new(),
            patterns: PatternTable::default(),
        })
    }

    /// Runs the three phases over `transactions`: frequency counting and
    /// canonicalization, tree construction, then pattern extraction.
    ///
    /// Any state left by a previous call is replaced as a whole.
    pub fn fit<I, J>(&mut self, transactions: I)
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = T>,
    {
        let min_support = self.config.min_support;
        let deduped: Vec<Vec<T>> = transactions.into_iter().map(dedup_transaction).collect();
        info!("Counting item frequencies over {} transactions...", deduped.len());

        let frequencies = count_item_frequencies(&deduped, min_support);
        let mut header_table = HeaderTable::from_frequencies(&frequencies);
        let canonical = canonicalize(&deduped, &header_table);

        info!("Constructing tree...");
        let tree = build_prefix_tree(&canonical, &mut header_table);

        info!("Extracting frequent patterns...");
        let conditional_bases = conditional_pattern_bases(
            &tree,
            &header_table,
            &frequencies,
            min_support,
            self.config.parallel,
        );
        let patterns = enumerate_patterns(&conditional_bases, &frequencies);

        self.frequencies = frequencies;
        self.header_table = header_table;
        self.transactions = canonical;
        self.tree = Some(tree);
        self.conditional_bases = conditional_bases;
        self.patterns = patterns;
    }

    pub fn min_support(&self) -> usize {
        self.config.min_support
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }

    pub fn item_frequencies(&self) -> &FrequencyTable<T> {
        &self.frequencies
    }

    pub fn header_table(&self) -> &HeaderTable<T> {
        &self.header_table
    }

    /// Canonicalized transactions: frequent items only, no duplicates, in
    /// descending global frequency order.
    pub fn transactions(&self) -> &[Vec<T>] {
        &self.transactions
    }

    pub fn tree(&self) -> Result<&PrefixTree<T>, FpError> {
        self.tree.as_ref().ok_or(FpError::NotFitted)
    }

    pub fn node_count(&self) -> Result<usize, FpError> {
        self.tree().map(PrefixTree::len)
    }

    pub fn conditional_pattern_base(&self, item: &T) -> Option<&ConditionalPatternBase<T>> {
        self.conditional_bases
            .iter()
            .find(|(candidate, _)| candidate == item)
            .map(|(_, base)| base)
    }

    /// Every conditional pattern base, in item-frequency-table order.
    pub fn conditional_pattern_bases(&self) -> impl Iterator<Item = (&T, &ConditionalPatternBase<T>)> {
        self.conditional_bases.iter().map(|(item, base)| (item, base))
    }

    pub fn frequent_patterns(&self) -> &PatternTable<T> {
        &self.patterns
    }
}

impl FPTree<usize> {
    /// Fits on a binary transaction matrix; items are the column indices.
    pub fn fit_dense(&mut self, transactions: ArrayView2<i32>) {
        self.fit(transactions_from_dense(transactions));
    }
}

/// One-shot helper: fits a fresh tree and hands back its pattern table.
pub fn mine_patterns<T, I, J>(transactions: I, min_support: usize) -> Result<PatternTable<T>, FpError>
where
    T: Item,
    I: IntoIterator<Item = J>,
    J: IntoIterator<Item = T>,
{
    let mut fp_tree = FPTree::new(min_support)?;
    fp_tree.fit(transactions);
    Ok(fp_tree.patterns)
}
