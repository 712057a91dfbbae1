pub mod forlist;
pub mod forsummary;
pub mod fortotal;

use crate::base;

/// Text tree. The root node is not printed; its children are printed flush
/// left and everything below them is indented with branch glyphs.
pub struct Tree<'a> {
    pub charset: &'a base::Charset,
    pub root: Node,
}

#[derive(Debug, Default)]
pub struct Node {
    pub data: std::borrow::Cow<'static, str>,
    pub children: Vec<Self>,
}

impl Node {
    pub fn new(data: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        Self {
            data: data.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child and returns it.
    pub fn push(&mut self, data: impl Into<std::borrow::Cow<'static, str>>) -> &mut Self {
        let i = self.children.len();
        self.children.push(Self::new(data));
        &mut self.children[i]
    }

    /// Returns the last child if its data equals `data`, otherwise appends a
    /// new child with that data. Used to group consecutive leaves under a
    /// shared heading.
    pub fn last_or_push(&mut self, data: &str) -> &mut Self {
        let reuse = self.children.last().is_some_and(|c| c.data == data);
        if reuse {
            let i = self.children.len() - 1;
            &mut self.children[i]
        } else {
            self.push(data.to_string())
        }
    }
}

impl std::fmt::Display for Tree<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_children(
            node: &Node,
            f: &mut std::fmt::Formatter,
            preprefix: &mut String,
            charset: &base::Charset,
        ) -> std::fmt::Result {
            let last = node.children.len().saturating_sub(1);
            for (i, child) in node.children.iter().enumerate() {
                let (prefix_tail, child_prefix_tail) = if i == last {
                    (charset.tree_corner, charset.tree_space)
                } else {
                    (charset.tree_sideways_t, charset.tree_pipe_gap)
                };
                writeln!(f, "{}{}{}", preprefix, prefix_tail, child.data)?;
                preprefix.push_str(child_prefix_tail);
                write_children(child, f, preprefix, charset)?;
                preprefix.truncate(preprefix.len() - child_prefix_tail.len());
            }
            Ok(())
        }

        let mut preprefix = String::new();
        for lv1 in self.root.children.iter() {
            writeln!(f, "{}", lv1.data)?;
            write_children(lv1, f, &mut preprefix, self.charset)?;
        }
        Ok(())
    }
}
