//! Name resolution for window expressions.
//!
//! The [`Binder`] turns a [`WindowExpression`] into a
//! [`BoundWindowExpression`]: columns are resolved against the tables of a
//! [`BindContext`], the function name is classified through a
//! [`FunctionCatalog`], and the clauses that depend on the function's
//! identity are checked.
//!
//! # Examples
//!
//! ```rust
//! use casement_query::binder::{BindContext, Binder, TableBinding};
//! use casement_query::types::{ExpressionType, FunctionCatalog};
//! use casement_query::{ParsedExpression, WindowExpression};
//!
//! let mut context = BindContext::new();
//! context.add_table(TableBinding::new("e", 0, ["name", "salary"]));
//! let catalog = FunctionCatalog::new();
//! let binder = Binder::new(&catalog, &context);
//!
//! let window = WindowExpression::new("rank", vec![]);
//! let bound = binder.bind_window(&window).unwrap();
//! assert_eq!(bound.function_type, ExpressionType::WindowRank);
//! assert_eq!(bound.to_string(), "rank() OVER ()");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::expr::{BoundExpression, ColumnBinding, ParsedExpression, quote_identifier};
use crate::types::{FunctionCatalog, OrderByNode};
use crate::window::{BoundWindowExpression, WindowExpression};

/// A table in scope and the columns it provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBinding {
	/// Alias the table is referenced by.
	pub alias: String,
	/// Table index used in [`ColumnBinding::table_index`].
	pub index: usize,
	/// Column names, in column-index order.
	pub columns: Vec<String>,
}

impl TableBinding {
	/// Creates a table binding.
	pub fn new<I, S>(alias: impl Into<String>, index: usize, columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			alias: alias.into(),
			index,
			columns: columns.into_iter().map(Into::into).collect(),
		}
	}

	/// Position of `name` among this table's columns.
	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|column| column == name)
	}
}

/// The tables visible while binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindContext {
	tables: Vec<TableBinding>,
}

impl BindContext {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a table to the scope.
	pub fn add_table(&mut self, table: TableBinding) -> &mut Self {
		self.tables.push(table);
		self
	}

	/// Tables in scope, in insertion order.
	pub fn tables(&self) -> &[TableBinding] {
		&self.tables
	}

	/// Resolves a possibly qualified column reference.
	///
	/// # Errors
	///
	/// - [`QueryError::ColumnNotFound`] if no table in scope (or no table with
	///   the given alias) has the column
	/// - [`QueryError::AmbiguousColumn`] if an unqualified name matches
	///   columns of more than one table
	pub fn resolve(&self, table: Option<&str>, name: &str) -> QueryResult<ColumnBinding> {
		let display = || match table {
			Some(table) => format!("{}.{}", table, name),
			None => name.to_string(),
		};

		let mut matches = self
			.tables
			.iter()
			.filter(|binding| table.is_none_or(|alias| binding.alias == alias))
			.filter_map(|binding| {
				binding
					.column_index(name)
					.map(|column| ColumnBinding::new(binding.index, column))
			});

		let Some(found) = matches.next() else {
			return Err(QueryError::ColumnNotFound(display()));
		};
		if matches.next().is_some() {
			return Err(QueryError::AmbiguousColumn(display()));
		}
		Ok(found)
	}
}

/// Binds parsed window expressions.
#[derive(Debug, Clone, Copy)]
pub struct Binder<'a> {
	catalog: &'a FunctionCatalog,
	context: &'a BindContext,
}

impl<'a> Binder<'a> {
	/// Creates a binder over a function catalog and a table scope.
	pub fn new(catalog: &'a FunctionCatalog, context: &'a BindContext) -> Self {
		Self { catalog, context }
	}

	/// Binds an expression.
	///
	/// # Errors
	///
	/// Propagates column resolution failures and, for nested window calls,
	/// every error of [`bind_window`](Self::bind_window).
	pub fn bind_expression(&self, expr: &ParsedExpression) -> QueryResult<BoundExpression> {
		Ok(match expr {
			ParsedExpression::Column { table, name } => BoundExpression::ColumnRef {
				alias: expr.to_string(),
				binding: self.context.resolve(table.as_deref(), name)?,
			},
			ParsedExpression::Constant(value) => BoundExpression::Constant(value.clone()),
			ParsedExpression::Function { schema, name, args } => BoundExpression::Function {
				name: match schema {
					Some(schema) => format!("{}.{}", quote_identifier(schema), name),
					None => name.clone(),
				},
				children: self.bind_all(args)?,
			},
			ParsedExpression::Star => BoundExpression::Star,
			ParsedExpression::Binary { left, op, right } => BoundExpression::Binary {
				left: Box::new(self.bind_expression(left)?),
				op: *op,
				right: Box::new(self.bind_expression(right)?),
			},
			ParsedExpression::Window(window) => {
				BoundExpression::Window(Box::new(self.bind_window(window)?))
			}
		})
	}

	/// Binds a window function call.
	///
	/// # Errors
	///
	/// - [`QueryError::UnknownFunction`] if the catalog does not know the function
	/// - [`QueryError::InvalidWindow`] if the expression fails
	///   [`WindowExpression::validate`], if FILTER or DISTINCT is used on a
	///   non-aggregate, or if an offset/default argument is given to anything
	///   but LEAD or LAG
	/// - column resolution errors from any sub-expression
	pub fn bind_window(&self, window: &WindowExpression) -> QueryResult<BoundWindowExpression> {
		window.validate()?;
		let function_type = self.catalog.classify(&window.function_name)?;

		if !function_type.is_aggregate() {
			if window.filter_expr.is_some() {
				return Err(QueryError::InvalidWindow(format!(
					"FILTER is only supported for aggregates, not {}",
					window.function_name
				)));
			}
			if window.distinct {
				return Err(QueryError::InvalidWindow(format!(
					"DISTINCT is only supported for aggregates, not {}",
					window.function_name
				)));
			}
		}
		if !function_type.accepts_offset()
			&& (window.offset_expr.is_some() || window.default_expr.is_some())
		{
			return Err(QueryError::InvalidWindow(format!(
				"{} does not take offset or default arguments",
				window.function_name
			)));
		}

		tracing::debug!(
			function = %window.function_name,
			function_type = %function_type,
			"binding window expression"
		);

		Ok(BoundWindowExpression {
			function_type,
			catalog: window.catalog.clone(),
			schema: window.schema.clone(),
			function_name: window.function_name.clone(),
			children: self.bind_all(&window.children)?,
			partitions: self.bind_all(&window.partitions)?,
			orders: self.bind_orders(&window.orders)?,
			filter_expr: self.bind_optional(window.filter_expr.as_ref())?,
			ignore_nulls: window.ignore_nulls,
			distinct: window.distinct,
			start: window.start.try_map(|expr| self.bind_expression(expr))?,
			end: window.end.try_map(|expr| self.bind_expression(expr))?,
			exclude: window.exclude,
			offset_expr: self.bind_optional(window.offset_expr.as_ref())?,
			default_expr: self.bind_optional(window.default_expr.as_ref())?,
			arg_orders: self.bind_orders(&window.arg_orders)?,
		})
	}

	fn bind_all(&self, exprs: &[ParsedExpression]) -> QueryResult<Vec<BoundExpression>> {
		exprs.iter().map(|expr| self.bind_expression(expr)).collect()
	}

	fn bind_optional(
		&self,
		expr: Option<&ParsedExpression>,
	) -> QueryResult<Option<BoundExpression>> {
		expr.map(|expr| self.bind_expression(expr)).transpose()
	}

	fn bind_orders(
		&self,
		orders: &[OrderByNode<ParsedExpression>],
	) -> QueryResult<Vec<OrderByNode<BoundExpression>>> {
		orders
			.iter()
			.map(|node| {
				Ok(OrderByNode {
					order: node.order,
					null_order: node.null_order,
					expression: self.bind_expression(&node.expression)?,
				})
			})
			.collect()
	}
}
